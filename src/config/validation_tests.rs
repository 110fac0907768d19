use super::*;

fn config_from(toml_str: &str) -> Config {
    toml::from_str(toml_str).unwrap()
}

fn error_message(config: &Config) -> String {
    validate_config_semantics(config).unwrap_err().message()
}

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn zero_width_is_rejected() {
    let message = error_message(&config_from("[render]\nwidth = 0"));
    assert!(message.contains("render.width"));
}

#[test]
fn negative_padding_is_rejected() {
    let message = error_message(&config_from("[render]\npadding = -1"));
    assert!(message.contains("render.padding"));
}

#[test]
fn padding_must_leave_room() {
    let message = error_message(&config_from("[render]\nheight = 100\npadding = 50"));
    assert!(message.contains("leaves no room"));
}

#[test]
fn empty_palette_is_rejected() {
    let message = error_message(&config_from("[render]\ncolors = []"));
    assert!(message.contains("render.colors"));
}

#[test]
fn blank_palette_entry_is_reported_by_index() {
    let message = error_message(&config_from("[render]\ncolors = [\"#fff\", \" \"]"));
    assert!(message.contains("render.colors[1]"));
}

#[test]
fn blank_background_is_rejected() {
    let message = error_message(&config_from("[render]\nbackground_color = \"\""));
    assert!(message.contains("background_color"));
}

#[test]
fn embed_needs_languages() {
    let message = error_message(&config_from("[embed]\nlanguages = []"));
    assert!(message.contains("embed.languages"));
}

#[test]
fn embed_needs_class_name() {
    let message = error_message(&config_from("[embed]\nclass_name = \"  \""));
    assert!(message.contains("embed.class_name"));
}
