use std::rc::Rc;

use yew::prelude::*;

use crate::config::{AppConfig, Platform};
use crate::utils::analytics::{AnalyticsEvent, EventReporter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Inverted,
}

impl ButtonStyle {
    fn class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "download-button primary",
            ButtonStyle::Inverted => "download-button inverted",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DownloadButtonProps {
    pub platform: Platform,
    pub config: Rc<AppConfig>,
    pub reporter: EventReporter,
    #[prop_or_default]
    pub style: ButtonStyle,
}

/// Reports the click, then leaves navigation to the anchor.
pub fn report_download(reporter: &EventReporter, platform: Platform) {
    reporter.log_event(AnalyticsEvent::AppDownload(platform));
}

/// Anchor for `platform`, or nothing when the config has no target for it.
pub fn download_link(
    config: &AppConfig,
    platform: Platform,
    style: ButtonStyle,
    onclick: Callback<MouseEvent>,
) -> Html {
    let Some(target) = config.download(platform) else {
        log::warn!("No download configured for {}", platform);
        return html! {};
    };

    html! {
        <a href={target.url.clone()} class={style.class()} {onclick}>
            <span class="download-icon">{"⬇"}</span>
            <span class="download-text">
                <span class="download-label">{&target.label}</span>
                <span class="download-size">{&target.size}</span>
            </span>
        </a>
    }
}

#[function_component(DownloadButton)]
pub fn download_button(props: &DownloadButtonProps) -> Html {
    let onclick = {
        let reporter = props.reporter.clone();
        let platform = props.platform;
        Callback::from(move |_: MouseEvent| report_download(&reporter, platform))
    };

    download_link(&props.config, props.platform, props.style, onclick)
}

/// Every configured platform, in a stable order.
#[derive(Properties, PartialEq)]
pub struct DownloadButtonsProps {
    pub config: Rc<AppConfig>,
    pub reporter: EventReporter,
    #[prop_or_default]
    pub style: ButtonStyle,
}

#[function_component(DownloadButtons)]
pub fn download_buttons(props: &DownloadButtonsProps) -> Html {
    html! {
        <div class="download-group">
            {
                Platform::ALL.iter().map(|&platform| html! {
                    <DownloadButton
                        key={platform.key()}
                        {platform}
                        config={props.config.clone()}
                        reporter={props.reporter.clone()}
                        style={props.style}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}
