// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Named visual constants for the toast cards and the demo window. Widgets
reference these instead of literal numbers so the look can be tuned in one
place.

| Module | Contents |
|---|---|
| [`palette`] | neutrals and one accent per toast mode |
| [`opacity`] | card, faded and tint alphas |
| [`spacing`] | multiples of a 4px unit |
| [`sizing`] | toast and control dimensions |
| [`typography`] | font sizes |
| [`border`] | border widths by role |
| [`radius`] | corner radii |
| [`shadow`] | drop shadows |

```
use snap_toast::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let leaving = Color { a: opacity::FADED, ..palette::WARNING };
assert_eq!(spacing::MD, 4.0 * spacing::UNIT);
```
"#]

use iced::Color;

/// Neutrals plus the accent of each toast mode.
pub mod palette {
    use super::Color;

    pub const INK: Color = Color::BLACK;
    pub const PAPER: Color = Color::WHITE;
    /// Neutral fill for controls without a mode.
    pub const SLATE: Color = Color::from_rgb(0.28, 0.30, 0.33);
    /// Neutral tint for hover states and unstyled markers.
    pub const MIST: Color = Color::from_rgb(0.45, 0.47, 0.50);

    pub const INFO: Color = Color::from_rgb(0.235, 0.522, 0.949);
    pub const WARNING: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const DANGER: Color = Color::from_rgb(0.863, 0.208, 0.271);
    pub const SUCCESS: Color = Color::from_rgb(0.157, 0.655, 0.271);
}

pub mod opacity {
    /// Fully shown toast card.
    pub const CARD: f32 = 0.96;
    /// Toast that is entering or on its way out, disabled controls.
    pub const FADED: f32 = 0.45;
    /// Hovered background tint.
    pub const HOVER_TINT: f32 = 0.18;
    /// Pressed background tint.
    pub const PRESSED_TINT: f32 = 0.35;
    pub const SOLID: f32 = 1.0;
}

pub mod spacing {
    pub const UNIT: f32 = 4.0;

    pub const XXS: f32 = UNIT;
    pub const XS: f32 = UNIT * 2.0;
    pub const SM: f32 = UNIT * 3.0;
    pub const MD: f32 = UNIT * 4.0;
    pub const LG: f32 = UNIT * 6.0;
}

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Height a toast is clipped to unless expanded.
    pub const TOAST_COLLAPSED_HEIGHT: f32 = 120.0;
    /// Diameter of the mode marker in a toast header.
    pub const MODE_DOT: f32 = 8.0;
    pub const CONTROL_HEIGHT: f32 = 34.0;
    /// Width of the form column in the demo window.
    pub const FORM_WIDTH: f32 = 420.0;
}

pub mod typography {
    pub const HEADING: f32 = 22.0;
    /// Toast titles and messages, form labels.
    pub const BODY: f32 = 14.0;
    /// Expand toggle, queue status lines.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Unstyled (`plain`) toasts.
    pub const HAIRLINE: f32 = 1.0;
    /// Mode-colored toast outline.
    pub const ACCENT: f32 = 2.0;
    /// Pinned toasts.
    pub const PINNED: f32 = 3.5;
}

pub mod radius {
    pub const CONTROL: f32 = 4.0;
    pub const CARD: f32 = 10.0;
    pub const PILL: f32 = 999.0;
}

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    pub const FLAT: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Lifts toast cards off the content beneath.
    pub const CARD: Shadow = Shadow {
        color: Color {
            a: opacity::PRESSED_TINT,
            ..palette::INK
        },
        offset: Vector { x: 0.0, y: 3.0 },
        blur_radius: 12.0,
    };
}

const _: () = {
    assert!(spacing::UNIT > 0.0);
    assert!(spacing::LG > spacing::MD && spacing::MD > spacing::SM);
    assert!(spacing::SM > spacing::XS && spacing::XS > spacing::XXS);

    assert!(opacity::FADED < opacity::CARD && opacity::CARD <= opacity::SOLID);
    assert!(opacity::HOVER_TINT < opacity::PRESSED_TINT);

    assert!(sizing::TOAST_COLLAPSED_HEIGHT > sizing::CONTROL_HEIGHT);
    assert!(sizing::MODE_DOT < typography::BODY);
    assert!(typography::HEADING > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::PINNED > border::ACCENT);
    assert!(border::ACCENT > border::HAIRLINE);
};
