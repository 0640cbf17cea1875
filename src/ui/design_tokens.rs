// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by every page of the quiz.

## Organization

- **Palette**: Base and semantic colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border** / **Radius** / **Shadow**

## Examples

```
use iced_quiz::ui::design_tokens::{palette, spacing};

let accent = palette::CORRECT_500;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1F2937
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // #6B7280
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9CA3AF
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922); // #E5E7EB
    pub const GRAY_100: Color = Color::from_rgb(0.976, 0.980, 0.984); // #F9FAFB

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.859, 0.918, 0.996); // #DBEAFE
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980); // #60A5FA
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3B82F6
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // #2563EB

    // Answer feedback
    pub const CORRECT_100: Color = Color::from_rgb(0.820, 0.980, 0.898); // #D1FAE5
    pub const CORRECT_500: Color = Color::from_rgb(0.063, 0.725, 0.506); // #10B981
    pub const INCORRECT_100: Color = Color::from_rgb(0.996, 0.886, 0.886); // #FEE2E2
    pub const INCORRECT_500: Color = Color::from_rgb(0.937, 0.267, 0.267); // #EF4444

    // Semantic colors
    pub const ERROR_500: Color = INCORRECT_500;
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.620, 0.043); // #F59E0B
    pub const INFO_500: Color = PRIMARY_500;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const DISABLED: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Cards and panels
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Question image frame (4:3).
    pub const QUESTION_IMAGE_WIDTH: f32 = 480.0;
    pub const QUESTION_IMAGE_HEIGHT: f32 = 360.0;

    pub const CATEGORY_CARD_WIDTH: f32 = 220.0;
    pub const CATEGORY_ICON: f32 = 96.0;
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;

    pub const VOLUME_SLIDER_WIDTH: f32 = 100.0;
    pub const TRANSPORT_BUTTON: f32 = 44.0;
    pub const PROGRESS_HEIGHT: f32 = 8.0;
    pub const RESULT_RING_WIDTH: f32 = 240.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.

    /// Emoji hero (result panel, score page)
    pub const DISPLAY: f32 = 64.0;

    /// Score counter on the results page
    pub const TITLE_XL: f32 = 48.0;

    /// Page headings
    pub const TITLE_LG: f32 = 30.0;

    pub const TITLE_MD: f32 = 20.0;

    /// Choice labels
    pub const BODY_LG: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Choice buttons
    pub const WIDTH_LG: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.15,
    };

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector { x: 0.0, y: 0.0 },
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DISABLED > 0.0 && opacity::DISABLED < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_XL);
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_LG > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn question_image_is_four_by_three() {
        let ratio = sizing::QUESTION_IMAGE_WIDTH / sizing::QUESTION_IMAGE_HEIGHT;
        assert!((ratio - 4.0 / 3.0).abs() < f32::EPSILON);
    }
}
