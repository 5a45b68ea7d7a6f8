use std::rc::Rc;

use yew::prelude::*;

use crate::components::carousel::ScreenshotCarousel;
use crate::components::download_button::{ButtonStyle, DownloadButtons};
use crate::config::AppConfig;
use crate::utils::analytics::{AnalyticsEvent, EventReporter};

const FEATURES: [(&str, &str, &str); 3] = [
    ("🎯", "Atomic Habits", "Built on proven behavioral science principles"),
    ("⚡", "Gamification", "Earn XP, level up, and unlock achievements"),
    ("📈", "Track Progress", "Visualize your daily improvements"),
];

const STEPS: [(&str, &str); 4] = [
    ("Create your habits", "Set up daily habits with difficulty levels and reminders"),
    ("Complete and earn XP", "Check off habits daily to earn experience points"),
    ("Level up your character", "Gain levels and unlock rewards as you build consistency"),
    ("Stay consistent or lose HP", "Missing habits costs health points - reach zero and restart"),
];

const XP_REWARDS: [(&str, u32, &str); 3] = [
    ("Easy habit", 10, "xp-easy"),
    ("Medium habit", 25, "xp-medium"),
    ("Hard habit", 50, "xp-hard"),
];

pub fn report_page_visit(reporter: &EventReporter) {
    reporter.log_event(AnalyticsEvent::PageVisit);
}

fn stat_bar(label: &str, value: u32, max: u32, fill_class: &'static str) -> Html {
    let percent = value * 100 / max.max(1);
    html! {
        <>
            <div class="stat-row">
                <span>{label}</span>
                <span>{format!("{}/{}", value, max)}</span>
            </div>
            <div class="stat-bar">
                <div class={classes!("stat-fill", fill_class)} style={format!("width: {}%;", percent)}></div>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: Rc<AppConfig>,
    pub reporter: EventReporter,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // One visit per mount
    {
        let reporter = props.reporter.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                report_page_visit(&reporter);
                || ()
            },
            (),
        );
    }

    let landing_css = r#"
        .habit-landing {
            min-height: 100vh;
            background: white;
            color: #111827;
            font-family: system-ui, -apple-system, sans-serif;
        }
        .habit-landing section {
            padding: 4rem 1rem;
        }
        .habit-landing .muted {
            background: #f9fafb;
        }
        .habit-landing h2 {
            font-size: 1.875rem;
            font-weight: 700;
            text-align: center;
            margin-bottom: 3rem;
        }
        .hero {
            max-width: 56rem;
            margin: 0 auto;
            text-align: center;
            padding-top: 1rem;
        }
        .hero h1 {
            font-size: 3.5rem;
            font-weight: 700;
            margin-bottom: 1.5rem;
        }
        .hero-subtitle {
            font-size: 1.25rem;
            color: #4b5563;
            max-width: 42rem;
            margin: 0 auto 2.5rem;
        }
        .download-group {
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
            justify-content: center;
            margin-bottom: 4rem;
        }
        .download-button {
            display: inline-flex;
            align-items: center;
            gap: 0.75rem;
            padding: 0.75rem 1.5rem;
            border-radius: 0.5rem;
            font-weight: 500;
            text-decoration: none;
            transition: background 0.2s;
        }
        .download-button.primary {
            background: #9333ea;
            color: white;
        }
        .download-button.primary:hover {
            background: #7e22ce;
        }
        .download-button.inverted {
            background: white;
            color: #9333ea;
        }
        .download-button.inverted:hover {
            background: #f3f4f6;
        }
        .download-text {
            display: flex;
            flex-direction: column;
            text-align: left;
        }
        .download-size {
            font-size: 0.75rem;
            opacity: 0.8;
        }
        .level-card {
            max-width: 28rem;
            margin: 0 auto;
            background: linear-gradient(135deg, #a855f7, #3b82f6);
            border-radius: 1rem;
            padding: 1.5rem;
            color: white;
            text-align: left;
        }
        .level-header {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            margin-bottom: 1rem;
        }
        .level-badge {
            width: 3rem;
            height: 3rem;
            border-radius: 9999px;
            background: rgba(255, 255, 255, 0.2);
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.5rem;
        }
        .stat-row {
            display: flex;
            justify-content: space-between;
            font-size: 0.875rem;
            margin-top: 0.5rem;
        }
        .stat-bar {
            width: 100%;
            height: 0.75rem;
            background: rgba(255, 255, 255, 0.2);
            border-radius: 9999px;
            overflow: hidden;
        }
        .hp-card .stat-bar {
            background: #e5e7eb;
        }
        .stat-fill {
            height: 100%;
        }
        .stat-fill.xp {
            background: #facc15;
        }
        .stat-fill.hp {
            background: #f87171;
        }
        .habit-completed {
            margin-top: 1rem;
            border: 2px solid #86efac;
            background: rgba(34, 197, 94, 0.3);
            border-radius: 0.5rem;
            padding: 0.75rem;
            text-align: center;
        }
        .section-intro {
            text-align: center;
            color: #4b5563;
            margin: -2.25rem 0 2.5rem;
        }
        .feature-grid {
            max-width: 64rem;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
            gap: 2rem;
            text-align: center;
        }
        .feature-icon {
            width: 3.5rem;
            height: 3.5rem;
            margin: 0 auto 1rem;
            background: #f3e8ff;
            border-radius: 0.75rem;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.75rem;
        }
        .steps {
            max-width: 56rem;
            margin: 0 auto;
        }
        .step {
            display: flex;
            gap: 1rem;
            align-items: flex-start;
            margin-bottom: 2rem;
        }
        .step-number {
            flex-shrink: 0;
            width: 2.5rem;
            height: 2.5rem;
            border-radius: 9999px;
            background: #9333ea;
            color: white;
            font-weight: 700;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .mechanics {
            max-width: 64rem;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
            gap: 2rem;
        }
        .mechanic {
            border: 2px solid;
            border-radius: 0.75rem;
            padding: 1.5rem;
        }
        .mechanic.xp-card {
            border-color: #facc15;
            background: #fefce8;
        }
        .mechanic.hp-card {
            border-color: #f87171;
            background: #fef2f2;
        }
        .mechanic-icon {
            font-size: 2.25rem;
            margin-bottom: 0.75rem;
        }
        .reward-row {
            display: flex;
            justify-content: space-between;
            font-size: 0.875rem;
            margin-top: 0.5rem;
        }
        .xp-easy { color: #16a34a; font-weight: 700; }
        .xp-medium { color: #2563eb; font-weight: 700; }
        .xp-hard { color: #9333ea; font-weight: 700; }
        .hp-box {
            background: white;
            border-radius: 0.5rem;
            padding: 0.75rem;
        }
        .habit-landing .cta {
            background: #9333ea;
            color: white;
            text-align: center;
        }
        .cta h2 {
            font-size: 2.25rem;
            margin-bottom: 1rem;
        }
        .cta-subtitle {
            font-size: 1.25rem;
            color: #f3e8ff;
            margin-bottom: 2rem;
        }
        .cta .download-group {
            margin-bottom: 2rem;
        }
        .cta-perks {
            display: flex;
            justify-content: center;
            gap: 2rem;
            font-size: 0.875rem;
            color: #f3e8ff;
        }
        .habit-footer {
            background: #111827;
            color: white;
            padding: 2rem 1rem;
            text-align: center;
        }
        .footer-brand {
            font-size: 1.25rem;
            font-weight: 700;
            color: #c084fc;
        }
        .footer-links {
            display: flex;
            justify-content: center;
            gap: 1.5rem;
            margin: 1rem 0;
            font-size: 0.875rem;
        }
        .footer-links a {
            color: #9ca3af;
            text-decoration: none;
        }
        .footer-links a:hover {
            color: white;
        }
        .footer-copy {
            color: #6b7280;
            font-size: 0.875rem;
        }
        @media (max-width: 768px) {
            .hero h1 {
                font-size: 2.5rem;
            }
            .cta-perks {
                flex-direction: column;
                gap: 0.5rem;
            }
        }
    "#;

    html! {
        <div class="habit-landing">
            <style>{landing_css}</style>
            <section>
                <div class="hero">
                    <h1>{"Level Up Your Life, One Habit at a Time"}</h1>
                    <p class="hero-subtitle">
                        {"Turn daily habits into an epic adventure. Build better routines with gamified tracking powered by Atomic Habits principles."}
                    </p>
                    <DownloadButtons config={props.config.clone()} reporter={props.reporter.clone()} />
                    <div class="level-card">
                        <div class="level-header">
                            <div class="level-badge">{"🎯"}</div>
                            <div>
                                <div><strong>{"Level 12"}</strong></div>
                                <div class="stat-row">{"Keep going!"}</div>
                            </div>
                        </div>
                        {stat_bar("XP", 750, 1000, "xp")}
                        {stat_bar("HP", 85, 100, "hp")}
                        <div class="habit-completed">
                            <div>{"Habit Completed!"}</div>
                            <div><strong>{"+50 XP"}</strong></div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="muted">
                <h2>{"See the App"}</h2>
                <p class="section-intro">{"Swipe through screenshots"}</p>
                <ScreenshotCarousel items={props.config.screenshots.clone()} />
            </section>

            <section>
                <h2>{"Key Features"}</h2>
                <div class="feature-grid">
                    {
                        FEATURES.iter().map(|(icon, title, desc)| html! {
                            <div>
                                <div class="feature-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="muted">
                <h2>{"How It Works"}</h2>
                <div class="steps">
                    {
                        STEPS.iter().enumerate().map(|(i, (title, desc))| html! {
                            <div class="step">
                                <div class="step-number">{(i + 1).to_string()}</div>
                                <div>
                                    <h3>{*title}</h3>
                                    <p>{*desc}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section>
                <h2>{"The Game Mechanics"}</h2>
                <div class="mechanics">
                    <div class="mechanic xp-card">
                        <div class="mechanic-icon">{"⭐"}</div>
                        <h3>{"Earn XP"}</h3>
                        <p>{"Complete habits to earn experience points. Harder habits give more XP."}</p>
                        {
                            XP_REWARDS.iter().map(|(label, xp, class)| html! {
                                <div class="reward-row">
                                    <span>{*label}</span>
                                    <span class={*class}>{format!("+{} XP", xp)}</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="mechanic hp-card">
                        <div class="mechanic-icon">{"❤️"}</div>
                        <h3>{"Protect Your HP"}</h3>
                        <p>{"Missing habits costs health points. Reach zero HP and your character resets to Level 1."}</p>
                        <div class="hp-box">
                            {stat_bar("Current HP", 45, 100, "hp")}
                        </div>
                    </div>
                </div>
            </section>

            <section class="cta">
                <h2>{"Ready to Start Your Journey?"}</h2>
                <p class="cta-subtitle">{"Download Habit and level up your life today"}</p>
                <DownloadButtons
                    config={props.config.clone()}
                    reporter={props.reporter.clone()}
                    style={ButtonStyle::Inverted}
                />
                <div class="cta-perks">
                    <span>{"✓ Free to download"}</span>
                    <span>{"✓ No account needed"}</span>
                </div>
            </section>

            <footer class="habit-footer">
                <div class="footer-brand">{"Habit"}</div>
                <p class="footer-copy">{"Level up your life"}</p>
                <div class="footer-links">
                    <a href="#">{"Privacy"}</a>
                    <a href="#">{"Terms"}</a>
                    <a href="#">{"Contact"}</a>
                </div>
                <div class="footer-copy">
                    {format!("© 2025 Habit App. Version {}", props.config.version)}
                </div>
            </footer>
        </div>
    }
}
