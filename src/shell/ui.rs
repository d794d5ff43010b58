//! Presentational primitives. Each one takes declarative flags and renders
//! markup; none carries behavior.

use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Ghost,
    Subtle,
}

impl Variant {
    fn class(self) -> &'static str {
        match self {
            Variant::Default => "btn-default",
            Variant::Ghost => "btn-ghost",
            Variant::Subtle => "btn-subtle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Default,
    Sm,
}

impl Size {
    fn class(self) -> &'static str {
        match self {
            Size::Default => "btn-size-default",
            Size::Sm => "btn-size-sm",
        }
    }
}

fn button_class(variant: Variant, size: Size, extra: &str) -> String {
    if extra.is_empty() {
        format!("btn {} {}", variant.class(), size.class())
    } else {
        format!("btn {} {} {}", variant.class(), size.class(), extra)
    }
}

/// A `type="button"` button; it submits nothing and has no handler.
pub fn button(variant: Variant, size: Size, disabled: bool, extra: &str, body: Markup) -> Markup {
    html! {
        button type="button" class=(button_class(variant, size, extra)) disabled[disabled] {
            (body)
        }
    }
}

/// The submit button of the enclosing form.
pub fn submit_button(variant: Variant, size: Size, body: Markup) -> Markup {
    html! {
        button type="submit" class=(button_class(variant, size, "")) {
            (body)
        }
    }
}

/// A link styled as a button.
pub fn link_button(href: &str, variant: Variant, size: Size, extra: &str, body: Markup) -> Markup {
    html! {
        a class=(button_class(variant, size, extra)) href=(href) {
            (body)
        }
    }
}

pub fn icon(name: &str) -> Markup {
    html! {
        span class=(format!("icon icon-{name}")) aria-hidden="true" {}
    }
}

pub fn avatar(src: Option<&str>, alt: &str, fallback: &str) -> Markup {
    html! {
        span.avatar {
            @if let Some(src) = src {
                img.avatar-image src=(src) alt=(alt);
            }
            span.avatar-fallback { (fallback) }
        }
    }
}

pub fn scroll_area(body: Markup) -> Markup {
    html! {
        div.scroll-area {
            div.scroll-viewport {
                (body)
            }
        }
    }
}

/// Dropdown built on `<details>`, so it opens without script.
pub fn dropdown(label: &str, trigger: Markup, content: Markup) -> Markup {
    html! {
        details.dropdown {
            summary class=(button_class(Variant::Ghost, Size::Default, "avatar-trigger")) aria-label=(label) {
                (trigger)
            }
            div.dropdown-content role="menu" {
                (content)
            }
        }
    }
}

pub fn menu_label(text: &str) -> Markup {
    html! { div.menu-label { (text) } }
}

pub fn menu_separator() -> Markup {
    html! { div.menu-separator role="separator" {} }
}

pub fn menu_item(icon_name: &str, label: &str, shortcut: Option<&str>, enabled: bool) -> Markup {
    html! {
        div.menu-item role="menuitem" aria-disabled=(if enabled { "false" } else { "true" }) {
            (icon(icon_name))
            span { (label) }
            @if let Some(shortcut) = shortcut {
                span.menu-shortcut { (shortcut) }
            }
        }
    }
}

pub fn submenu(icon_name: &str, label: &str, content: Markup) -> Markup {
    html! {
        details.submenu {
            summary.menu-item role="menuitem" aria-haspopup="menu" {
                (icon(icon_name))
                span { (label) }
            }
            div.submenu-content role="menu" {
                (content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_flag_controls_attribute() {
        let off = button(Variant::Ghost, Size::Sm, true, "", html! { "Stream" }).into_string();
        let on = button(Variant::Ghost, Size::Sm, false, "", html! { "Stream" }).into_string();

        assert!(off.contains(" disabled"));
        assert!(!on.contains("disabled"));
        assert!(on.contains(r#"class="btn btn-ghost btn-size-sm""#));
    }

    #[test]
    fn submit_button_submits_with_default_style() {
        let markup = submit_button(Variant::Default, Size::Default, html! { "Continue" }).into_string();
        assert_eq!(markup, r#"<button type="submit" class="btn btn-default btn-size-default">Continue</button>"#);
    }

    #[test]
    fn avatar_without_image_shows_fallback_only() {
        let markup = avatar(None, "@ada", "AL").into_string();
        assert!(!markup.contains("<img"));
        assert!(markup.contains("AL"));
    }

    #[test]
    fn text_is_escaped() {
        let markup = menu_item("user", "<b>x</b>", None, false).into_string();
        assert!(markup.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(markup.contains(r#"aria-disabled="true""#));
    }
}
