mod app;
mod domain;
mod i18n;
mod infra;
mod query;
mod table;
mod ui;

#[cfg(test)]
mod tests;

#[cfg(feature = "desktop")]
use app::App;

#[cfg(feature = "desktop")]
fn main() {
    tracing_subscriber::fmt::init();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Backoffice")),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {}
