use super::*;

#[test]
fn dracula_needs_truecolor() {
    let rich = UiTheme::named("Dracula", TerminalColorSupport::TrueColor);
    assert_eq!(rich.editor_bg, Color::Rgb(0x28, 0x2a, 0x36));

    let plain = UiTheme::named("dracula", TerminalColorSupport::Ansi16);
    assert_eq!(plain, UiTheme::default());
}

#[test]
fn unknown_theme_falls_back_to_ansi() {
    assert_eq!(
        UiTheme::named("solarized", TerminalColorSupport::TrueColor),
        UiTheme::default()
    );
}
