// SPDX-License-Identifier: MPL-2.0
//! Page addresses.
//!
//! The desktop client keeps the web paths of the quiz so a start page can be
//! given on the command line and logs read the same as the backend's.

use crate::domain::CategoryId;
use crate::quiz::QuizState;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    CategorySelect,
    /// `/quiz/{category}`
    Quiz(CategoryId),
    /// `/quiz/{category}/results`
    Results(CategoryId),
}

impl Route {
    /// Parses a path. Unknown paths and categories yield `None`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(Route::CategorySelect),
            ["quiz", category] => category.parse().ok().map(Route::Quiz),
            ["quiz", category, "results"] => category.parse().ok().map(Route::Results),
            _ => None,
        }
    }

    #[must_use]
    pub fn path(self) -> String {
        match self {
            Route::CategorySelect => "/".to_string(),
            Route::Quiz(category) => format!("/quiz/{category}"),
            Route::Results(category) => format!("/quiz/{category}/results"),
        }
    }

    #[must_use]
    pub fn category(self) -> Option<CategoryId> {
        match self {
            Route::CategorySelect => None,
            Route::Quiz(category) | Route::Results(category) => Some(category),
        }
    }

    /// Where a navigation to `self` actually lands.
    ///
    /// The results page needs a session: without a category or with zero
    /// questions it redirects to the category list.
    #[must_use]
    pub fn guard(self, quiz: &QuizState) -> Self {
        match self {
            Route::Results(_) if !quiz.has_session() => Route::CategorySelect,
            route => route,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{Action, Effect, Settings, Store};
    use crate::domain::question::fixtures::question;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::CategorySelect));
        assert_eq!(Route::parse(""), Some(Route::CategorySelect));
        assert_eq!(
            Route::parse("/quiz/flags"),
            Some(Route::Quiz(CategoryId::Flags))
        );
        assert_eq!(
            Route::parse("/quiz/animals/results"),
            Some(Route::Results(CategoryId::Animals))
        );
        assert_eq!(
            Route::parse("/quiz/words/"),
            Some(Route::Quiz(CategoryId::Words))
        );
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/quiz/planets"), None);
        assert_eq!(Route::parse("/settings"), None);
        assert_eq!(Route::parse("/quiz/flags/answers"), None);
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::CategorySelect,
            Route::Quiz(CategoryId::Flags),
            Route::Results(CategoryId::Words),
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn results_without_session_redirect_home() {
        let store = Store::new(Settings::default());
        assert_eq!(
            Route::Results(CategoryId::Flags).guard(store.state()),
            Route::CategorySelect
        );
        assert_eq!(
            Route::Quiz(CategoryId::Flags).guard(store.state()),
            Route::Quiz(CategoryId::Flags)
        );
    }

    #[test]
    fn results_with_session_are_kept() {
        let mut store = Store::new(Settings::default());
        store.dispatch(Action::SetCategory(CategoryId::Flags));
        let Effect::FetchStarted(request) = store.dispatch(Action::StartLoading { count: 1 })
        else {
            panic!("expected a fetch");
        };
        store.dispatch(Action::QuestionsLoaded {
            ticket: request.ticket,
            result: Ok(vec![question("q1", CategoryId::Flags, "Japan", &["Peru"])]),
        });

        assert_eq!(
            Route::Results(CategoryId::Flags).guard(store.state()),
            Route::Results(CategoryId::Flags)
        );
    }
}
