// SPDX-License-Identifier: MPL-2.0
use iced_quiz::app::Route;
use iced_quiz::config::Config;
use iced_quiz::domain::{CategoryId, QuestionId, QuizQuestion};
use iced_quiz::i18n::fluent::I18n;
use iced_quiz::quiz::{
    shuffle_choices, Action, Effect, FetchRequest, LoadError, Phase, Recovery, Store,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn question(id: &str, category: CategoryId, answer: &str) -> QuizQuestion {
    QuizQuestion {
        id: QuestionId::new(id),
        question_image_url: format!("/images/{id}.png"),
        question_audio_url: format!("/audio/{id}.mp3"),
        correct_answer: answer.to_string(),
        choices: vec![
            "decoy-1".to_string(),
            answer.to_string(),
            "decoy-2".to_string(),
            "decoy-3".to_string(),
        ],
        category,
        explanation: String::new(),
    }
}

fn flags_questions(n: usize) -> Vec<QuizQuestion> {
    (0..n)
        .map(|i| question(&format!("flag-{i}"), CategoryId::Flags, &format!("country-{i}")))
        .collect()
}

fn begin(store: &mut Store, category: CategoryId, count: u32) -> FetchRequest {
    store.dispatch(Action::SetCategory(category));
    match store.dispatch(Action::StartLoading { count }) {
        Effect::FetchStarted(request) => request,
        other => panic!("expected a fetch, got {other:?}"),
    }
}

fn loaded_store(n: usize) -> Store {
    let mut store = Store::default();
    let request = begin(&mut store, CategoryId::Flags, n as u32);
    store.dispatch(Action::QuestionsLoaded {
        ticket: request.ticket,
        result: Ok(flags_questions(n)),
    });
    store
}

fn correct_answer(store: &Store) -> String {
    store
        .state()
        .current_question()
        .map(|q| q.correct_answer.clone())
        .expect("a current question")
}

#[test]
fn choosing_a_category_opens_its_quiz_route() {
    let mut store = Store::default();
    let request = begin(&mut store, CategoryId::Flags, 10);

    assert_eq!(store.state().category(), Some(CategoryId::Flags));
    assert_eq!(request.category, CategoryId::Flags);
    assert_eq!(request.count, 10);

    let route = Route::Quiz(CategoryId::Flags);
    assert_eq!(route.path(), "/quiz/flags");
    assert_eq!(Route::parse("/quiz/flags"), Some(route));
}

#[test]
fn empty_category_shows_localized_message_and_stops_loading() {
    let i18n = I18n::new(Some("ja".to_string()), &Config::default());
    let mut store = Store::default();
    let request = begin(&mut store, CategoryId::Animals, 10);
    assert!(store.state().is_loading());

    store.dispatch(Action::QuestionsLoaded {
        ticket: request.ticket,
        result: Ok(Vec::new()),
    });

    let state = store.state();
    assert!(!state.is_loading());
    let error = state.error().expect("an error");
    assert_eq!(error.recovery(), Recovery::ChooseAnotherCategory);
    assert_eq!(
        error.message(&i18n),
        "「animals」カテゴリの問題が見つかりませんでした。他のカテゴリをお試しください。"
    );
}

#[test]
fn perfect_run_completes_and_unlocks_results() {
    let mut store = loaded_store(5);

    for i in 0..5 {
        assert_eq!(store.state().current_index(), i);
        let answer = correct_answer(&store);
        match store.dispatch(Action::SelectAnswer(answer)) {
            Effect::Judged(judgement) => assert!(judgement.correct),
            other => panic!("expected a judgement, got {other:?}"),
        }
        let effect = store.dispatch(Action::NextQuestion);
        if i < 4 {
            assert_eq!(effect, Effect::Advanced);
        } else {
            assert_eq!(effect, Effect::Completed);
        }
    }

    let state = store.state();
    assert_eq!(state.score(), 5);
    assert_eq!(state.current_index(), 4);
    assert!(state.is_completed());
    assert_eq!(state.phase(), Phase::Completed);
    assert_eq!(
        Route::Results(CategoryId::Flags).guard(state),
        Route::Results(CategoryId::Flags)
    );
}

#[test]
fn results_route_without_session_falls_back_to_categories() {
    let store = Store::default();
    assert_eq!(
        Route::Results(CategoryId::Words).guard(store.state()),
        Route::CategorySelect
    );
}

#[test]
fn second_answer_is_ignored() {
    let mut store = loaded_store(3);
    store.dispatch(Action::SelectAnswer("decoy-1".to_string()));
    let before = store.state().clone();

    let effect = store.dispatch(Action::SelectAnswer(correct_answer(&store)));
    assert_eq!(effect, Effect::None);
    assert_eq!(store.state(), &before);
    assert_eq!(store.state().score(), 0);
    assert_eq!(store.state().selected_answer(), Some("decoy-1"));
}

#[test]
fn next_before_answering_is_ignored() {
    let mut store = loaded_store(3);
    assert_eq!(store.dispatch(Action::NextQuestion), Effect::None);
    assert_eq!(store.state().current_index(), 0);
}

#[test]
fn reset_keeps_category_and_clears_progress() {
    let mut store = loaded_store(3);
    let answer = correct_answer(&store);
    store.dispatch(Action::SelectAnswer(answer));
    store.dispatch(Action::ResetQuiz);

    let state = store.state();
    assert_eq!(state.category(), Some(CategoryId::Flags));
    assert!(state.questions().is_empty());
    assert_eq!(state.score(), 0);
    assert!(!state.is_completed());
    assert!(store.pending_fetch().is_none());
}

#[test]
fn stale_fetch_result_is_dropped() {
    let mut store = Store::default();
    let first = begin(&mut store, CategoryId::Flags, 3);
    let second = begin(&mut store, CategoryId::Animals, 3);

    let effect = store.dispatch(Action::QuestionsLoaded {
        ticket: first.ticket,
        result: Ok(flags_questions(3)),
    });
    assert_eq!(effect, Effect::Stale);
    assert!(store.state().is_loading());
    assert_eq!(store.pending_fetch(), Some(second.ticket));
}

#[test]
fn backend_failure_offers_retry_with_its_message() {
    let mut store = Store::default();
    let request = begin(&mut store, CategoryId::Words, 10);
    store.dispatch(Action::QuestionsLoaded {
        ticket: request.ticket,
        result: Err(LoadError::Backend("count must be 1-50".to_string())),
    });

    let error = store.state().error().expect("an error");
    assert_eq!(error.recovery(), Recovery::Retry);
    assert_eq!(
        error.message(&I18n::new(Some("ja".to_string()), &Config::default())),
        "count must be 1-50"
    );
}

#[test]
fn shuffling_leaves_the_question_untouched() {
    let original = question("flag-0", CategoryId::Flags, "Japan");
    let snapshot = original.clone();
    let mut rng = StdRng::seed_from_u64(7);

    let shuffled = shuffle_choices(&original.choices, &mut rng);

    assert_eq!(original, snapshot);
    let mut sorted = shuffled.clone();
    sorted.sort();
    let mut expected = original.choices.clone();
    expected.sort();
    assert_eq!(sorted, expected);
}
