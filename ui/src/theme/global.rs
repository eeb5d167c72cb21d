use dioxus::prelude::*;

use super::{media, Breakpoint, ThemeTokens};

const FONT_STACK: &str = "'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, \
Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif";

/// Base rules applied once at the application root.
pub fn global_stylesheet(tokens: &ThemeTokens) -> String {
    let ThemeTokens {
        background,
        surface,
        text_primary,
        primary,
        primary_hover,
        primary_dark,
        border_radius,
        scrollbar_track,
        scrollbar_thumb,
        scrollbar_thumb_hover,
    } = tokens;
    let md = media(Breakpoint::Md);
    let sm = media(Breakpoint::Sm);
    let font_stack = FONT_STACK;

    format!(
        r#":root {{
  --text-color: {text_primary};
  --primary-color: {primary};
  --primary-dark: {primary_dark};
  --surface-color: {surface};
  --border-radius: {border_radius};
}}

* {{
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}}

html, body {{
  font-family: {font_stack};
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
  background-color: {background};
  color: {text_primary};
  transition: background-color 0.3s ease, color 0.3s ease;
  overflow-x: hidden;
}}

#main {{
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}}

.page-shell {{
  flex: 1;
  padding: 5.5rem 1rem 2rem;
}}

a {{
  text-decoration: none;
  color: {primary};
  transition: color 0.2s ease;
}}

a:hover {{
  color: {primary_hover};
}}

button, input, textarea, select {{
  font-family: inherit;
}}

button {{
  cursor: pointer;
}}

input:focus, textarea:focus {{
  outline: 2px solid {primary};
}}

::-webkit-scrollbar {{
  width: 8px;
  height: 8px;
}}

::-webkit-scrollbar-track {{
  background: {scrollbar_track};
}}

::-webkit-scrollbar-thumb {{
  background: {scrollbar_thumb};
  border-radius: 4px;
}}

::-webkit-scrollbar-thumb:hover {{
  background: {scrollbar_thumb_hover};
}}

html {{
  font-size: 16px;
}}

{md} {{
  html {{
    font-size: 15px;
  }}
}}

{sm} {{
  html {{
    font-size: 14px;
  }}
}}
"#
    )
}

/// Provides the theme tokens consumed by [`GlobalStyles`] and the component styles.
#[component]
pub fn ThemeProvider(tokens: Option<ThemeTokens>, children: Element) -> Element {
    use_context_provider(|| Signal::new(tokens.unwrap_or_default()));

    rsx! { {children} }
}

/// Injects the global stylesheet for the current theme.
#[component]
pub fn GlobalStyles() -> Element {
    let tokens = try_use_context::<Signal<ThemeTokens>>();
    let css = match tokens {
        Some(tokens) => global_stylesheet(&tokens.read()),
        None => global_stylesheet(&ThemeTokens::default()),
    };

    rsx! {
        document::Style { "{css}" }
    }
}
