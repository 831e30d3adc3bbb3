mod check;
mod cli;
mod flash;
mod page;
mod progress;
mod sample;
mod store;
mod theme;

use std::time::Duration;

use anyhow::Context as _;
use cli::Args;
use store::PrefStore as _;

pub use cli::ProgressMode;
pub use cli::Args as CliArgs;

pub async fn run(args: Args) -> anyhow::Result<()> {
    use std::io::IsTerminal as _;

    let progress_enabled = match args.progress {
        ProgressMode::Always => true,
        ProgressMode::Never => false,
        ProgressMode::Auto => std::io::stderr().is_terminal(),
    };
    let progress = progress::Progress::new(progress_enabled);

    progress.set_stage("reading page");
    let html = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?,
        None => sample::build_page(),
    };
    let page = page::Page::parse(&html);

    let mut store = store::JsonFileStore::load(&args.prefs)?;

    progress.set_stage("applying theme");
    let stored = store.get(theme::STORAGE_KEY);
    let mut mode = theme::initialize(&page, stored.as_deref(), &args.toggle_id);
    tracing::info!(theme = mode.as_str(), "initial theme applied");

    if args.clicks > 0 {
        if page.toggle_control(&args.toggle_id).is_none() {
            tracing::warn!(toggle_id = %args.toggle_id, "toggle control not found; ignoring --clicks");
        } else {
            for _ in 0..args.clicks {
                mode = theme::toggle(&page, &mut store, &args.toggle_id)?;
            }
            tracing::info!(clicks = args.clicks, theme = mode.as_str(), "toggle clicks applied");
        }
    }

    if args.settle {
        let batch = flash::FlashBatch::collect(&page, &args.flash_class);
        tracing::info!(banners = batch.len(), "settling flash banners");
        let schedule = flash::DismissSchedule::new(
            Duration::from_millis(args.fade_ms),
            Duration::from_millis(args.remove_ms),
        );
        flash::settle(&batch, &schedule, &progress).await;
        check::assert_settled(&page, &args.flash_class)?;
    }

    check::assert_consistent(&page, &args.toggle_id)?;

    progress.set_stage("writing output");
    let enhanced = page.serialize()?;
    match &args.out {
        Some(path) => std::fs::write(path, enhanced)
            .with_context(|| format!("write {}", path.display()))?,
        None => {
            use std::io::Write as _;
            std::io::stdout()
                .write_all(enhanced.as_bytes())
                .context("write stdout")?;
        }
    }

    progress.finish();
    Ok(())
}
