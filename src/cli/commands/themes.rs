use mdpage::markdown::SyntaxHighlighter;

/// Print the available highlighting themes, one per line
pub fn handle_themes_command() {
    let mut themes = SyntaxHighlighter::available_themes();
    themes.sort();

    for theme in themes {
        println!("{}", theme);
    }
}
