use crate::config::ThemeSettings;

/// The global stylesheet. Built once at launch and served as a static asset;
/// pages only link to it.
pub struct Theme {
    stylesheet: String,
}

impl Theme {
    pub const HREF: &'static str = "/assets/shell.css";

    pub fn init(settings: &ThemeSettings) -> Self {
        let font = font_stack(&settings.font_family);
        Self { stylesheet: BASE_STYLESHEET.replace("{font}", &font) }
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }
}

/// The configured family first, then system fallbacks. Characters that could
/// end the declaration are dropped.
fn font_stack(family: &str) -> String {
    let family: String = family
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-')
        .collect();
    let family = family.trim();

    if family.is_empty() {
        "ui-sans-serif, system-ui, sans-serif".to_string()
    } else {
        format!("\"{family}\", ui-sans-serif, system-ui, sans-serif")
    }
}

const BASE_STYLESHEET: &str = r#":root {
  --font-sans: {font};
  --background: #ffffff;
  --foreground: #0f172a;
  --muted: #64748b;
  --border: #e5e5e5;
  --subtle: #f1f5f9;
  --hover: #f8fafc;
}

@media (prefers-color-scheme: dark) {
  :root {
    --background: #171717;
    --foreground: #f8fafc;
    --muted: #94a3b8;
    --border: #404040;
    --subtle: #262626;
    --hover: #1f1f1f;
  }
}

* { box-sizing: border-box; }
body { margin: 0; font-family: var(--font-sans); background: var(--background); color: var(--foreground); }

.sign-in-screen { width: 100vw; height: 100vh; display: flex; align-items: center; justify-content: center; }
.sign-in { display: flex; flex-direction: column; gap: 0.75rem; padding: 2rem; border: 1px solid var(--border); border-radius: 0.75rem; min-width: 20rem; }
.sign-in h1 { margin: 0; font-size: 1.25rem; }
.sign-in p { margin: 0; color: var(--muted); }

.page { display: flex; min-height: 100vh; flex-direction: column; }
.container { flex: 1; width: 100%; max-width: 1400px; margin: 0 auto; }
.layout { display: grid; grid-template-columns: repeat(4, minmax(0, 1fr)); }
@media (min-width: 1280px) { .layout { grid-template-columns: repeat(5, minmax(0, 1fr)); } }

.sidebar { padding-bottom: 3rem; }
.brand { padding: 1.5rem 2rem; }
.brand-label { margin: 0; font-size: 1.5rem; font-weight: 600; letter-spacing: -0.025em; }
.section { padding: 0.5rem 1.5rem; }
.section-title { margin: 0 0 0.5rem; padding: 0 0.5rem; font-size: 1.125rem; font-weight: 600; letter-spacing: -0.025em; }
.stack > * + * { margin-top: 0.25rem; }

.scroll-area { height: 230px; overflow: hidden; }
.scroll-viewport { height: 100%; overflow-y: auto; padding: 0.5rem; }

.content { grid-column: span 3; border-left: 1px solid var(--border); }
@media (min-width: 1280px) { .content { grid-column: span 4; } }
.content-inner { height: 100%; padding: 1.5rem 2rem; }
.header { display: flex; align-items: center; }
.viewer-name { margin-left: auto; margin-right: 1rem; }
.viewer-name h3 { margin: 0; font-size: 0.875rem; font-weight: 600; }

.btn { display: inline-flex; align-items: center; border: 0; border-radius: 0.375rem; background: transparent; color: inherit; font: inherit; font-size: 0.875rem; font-weight: 500; text-decoration: none; cursor: pointer; }
.btn-size-default { height: 2.5rem; padding: 0 1rem; }
.btn-size-sm { height: 2.25rem; padding: 0 0.75rem; }
.btn-default { background: var(--foreground); color: var(--background); justify-content: center; }
.btn-ghost:hover { background: var(--hover); }
.btn-subtle { background: var(--subtle); }
.btn:disabled { opacity: 0.5; cursor: default; pointer-events: none; }
.full-width { width: 100%; justify-content: flex-start; }
.font-normal { font-weight: 400; }

.icon { display: inline-block; width: 1rem; height: 1rem; margin-right: 0.5rem; }

.avatar { position: relative; display: inline-flex; width: 2.5rem; height: 2.5rem; border-radius: 9999px; overflow: hidden; background: var(--subtle); align-items: center; justify-content: center; }
.avatar-image { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.avatar-fallback { font-size: 0.875rem; }

.dropdown { position: relative; }
.dropdown > summary { list-style: none; }
.dropdown > summary::-webkit-details-marker { display: none; }
.dropdown-content { position: absolute; right: 0; z-index: 10; width: 14rem; padding: 0.25rem; border: 1px solid var(--border); border-radius: 0.375rem; background: var(--background); }
.menu-label { padding: 0.375rem 0.5rem; font-size: 0.875rem; font-weight: 600; }
.menu-separator { height: 1px; margin: 0.25rem -0.25rem; background: var(--border); }
.menu-item { display: flex; align-items: center; padding: 0.375rem 0.5rem; font-size: 0.875rem; border-radius: 0.25rem; }
.menu-item[aria-disabled="true"] { cursor: default; }
.menu-shortcut { margin-left: auto; font-size: 0.75rem; color: var(--muted); letter-spacing: 0.1em; }
.submenu > summary { list-style: none; }
.submenu-content { margin-left: 1rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_font_leads_the_stack() {
        let theme = Theme::init(&ThemeSettings { font_family: "Inter".to_string() });
        assert!(theme.stylesheet().contains("--font-sans: \"Inter\", ui-sans-serif"));
        assert!(!theme.stylesheet().contains("{font}"));
    }

    #[test]
    fn font_cannot_break_out_of_declaration() {
        assert_eq!(
            font_stack("Evil; } body { display: none"),
            "\"Evil  body  display none\", ui-sans-serif, system-ui, sans-serif"
        );
        assert_eq!(font_stack(" ;; "), "ui-sans-serif, system-ui, sans-serif");
    }
}
