use crate::page::Page;
use crate::theme::Theme;

pub fn assert_consistent(page: &Page, toggle_id: &str) -> anyhow::Result<()> {
    let Some(control) = page.toggle_control(toggle_id) else {
        return Ok(());
    };

    let mode = if page.is_light() {
        Theme::Light
    } else {
        Theme::Dark
    };
    let label = control.text_contents();
    let label = label.trim();
    if label != mode.glyph() {
        anyhow::bail!(
            "consistency check failed: toggle label {:?} does not match {} mode",
            label,
            mode.as_str()
        );
    }
    Ok(())
}

pub fn assert_settled(page: &Page, flash_class: &str) -> anyhow::Result<()> {
    let remaining = page.flash_messages(flash_class).len();
    if remaining > 0 {
        anyhow::bail!("settle check failed: {remaining} flash banner(s) still in the page");
    }
    Ok(())
}
