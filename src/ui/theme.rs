use iced::widget::{button, container, text, text_input as text_input_widget};
use iced::{Border, Color, Shadow, Theme};

/// Background of the dropdown and the input wrapper
const BACKGROUND: Color = Color {
    r: 0.12,
    g: 0.12,
    b: 0.15,
    a: 1.0,
};

/// Slightly lighter surface color for the text field and buttons
const SURFACE: Color = Color {
    r: 0.18,
    g: 0.18,
    b: 0.22,
    a: 1.0,
};

/// Accent color for focus and selection
const ACCENT: Color = Color {
    r: 0.35,
    g: 0.55,
    b: 0.85,
    a: 1.0,
};

const TEXT_PRIMARY: Color = Color {
    r: 0.9,
    g: 0.9,
    b: 0.92,
    a: 1.0,
};

const TEXT_SECONDARY: Color = Color {
    r: 0.55,
    g: 0.55,
    b: 0.6,
    a: 1.0,
};

const OUTLINE: Color = Color {
    r: 0.3,
    g: 0.3,
    b: 0.35,
    a: 0.5,
};

fn accent(alpha: f32) -> Color {
    Color { a: alpha, ..ACCENT }
}

/// Style for the container wrapping the input row
pub fn wrapper(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(BACKGROUND.into()),
        border: Border {
            color: OUTLINE,
            width: 1.0,
            radius: 8.0.into(),
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the text field; the accent border marks focus
pub fn text_input(_theme: &Theme, status: text_input_widget::Status) -> text_input_widget::Style {
    let focused = matches!(status, text_input_widget::Status::Focused { .. });
    text_input_widget::Style {
        background: SURFACE.into(),
        border: Border {
            color: if focused { ACCENT } else { Color::TRANSPARENT },
            width: if focused { 2.0 } else { 0.0 },
            radius: 6.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_SECONDARY,
        value: TEXT_PRIMARY,
        selection: accent(0.3),
    }
}

fn flat_button(status: button::Status, idle: Color) -> button::Style {
    let background = match status {
        button::Status::Hovered => accent(0.35),
        button::Status::Pressed => accent(0.5),
        button::Status::Active | button::Status::Disabled => idle,
    };
    button::Style {
        background: Some(background.into()),
        text_color: TEXT_PRIMARY,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        ..button::Style::default()
    }
}

/// Style for the attached button
pub fn combo_button(_theme: &Theme, status: button::Status) -> button::Style {
    flat_button(status, accent(0.2))
}

/// Style for the button opening the recent entries
pub fn recent_entry_button(_theme: &Theme, status: button::Status) -> button::Style {
    flat_button(status, SURFACE)
}

/// Style for the per-row delete affordance
pub fn delete_button(_theme: &Theme, status: button::Status) -> button::Style {
    let mut style = flat_button(status, Color::TRANSPARENT);
    if matches!(status, button::Status::Active) {
        style.text_color = TEXT_SECONDARY;
    }
    style
}

/// Style for the dropdown under the input
pub fn dropdown(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(BACKGROUND.into()),
        border: Border {
            color: OUTLINE,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color::BLACK,
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for a proposal row (not selected)
pub fn proposal_row(_theme: &Theme) -> container::Style {
    container::Style {
        background: None,
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the selected proposal row
pub fn proposal_row_selected(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(accent(0.2).into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

pub fn proposal_label(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}

/// Style for the "nothing to show" line
pub fn proposal_hint(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}

pub fn tooltip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: OUTLINE,
            width: 1.0,
            radius: 4.0.into(),
        },
        text_color: Some(TEXT_SECONDARY),
        ..container::Style::default()
    }
}
