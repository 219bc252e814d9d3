//! View registry.
//!
//! Every view is a pure function of the [`ContentStore`]. Rendering never
//! fetches; resources missing from the store render as empty output.

use crate::content::{About, Contacts, ContentStore, Job, PortfolioEntry, PortfolioSection};
use maud::{html, Markup};
use std::fmt;

const PORTFOLIO_INTRO: &str = "A list of my most successful work in clients' videos. Credited as \"Acaicia\" in the videos' description";
const SOURCE_URL: &str = "https://github.com/QuiteLiterallyConnor";
const SOURCE_LOGO: &str =
    "https://www.analyticsvidhya.com/wp-content/uploads/2015/07/github_logo-1024x219.png";
const SERVER_PICTURE: &str = "https://i.imgur.com/1BecPI3.jpeg";

/// The mutually exclusive tabs of the shared content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Resume,
    Portfolio,
    Contacts,
    Source,
}

impl View {
    pub const ALL: [View; 4] = [View::Resume, View::Portfolio, View::Contacts, View::Source];

    /// Whether the view reads anything from the store.
    pub fn needs_content(self) -> bool {
        !matches!(self, View::Source)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Resume => "resume",
            View::Portfolio => "portfolio",
            View::Contacts => "contacts",
            View::Source => "source",
        };
        f.write_str(name)
    }
}

/// Render a view for the shared content region.
pub fn render(view: View, store: &ContentStore) -> Markup {
    match view {
        View::Resume => render_resume(store.jobs.as_deref().unwrap_or_default()),
        View::Portfolio => render_portfolio(store),
        View::Contacts => render_contacts(store.contacts.as_ref()),
        View::Source => render_source(),
    }
}

/// Render the About side box.
pub fn render_about(store: &ContentStore) -> Markup {
    let (title, paragraphs) = match &store.about {
        Some(About { title, content }) => (title.as_str(), content.as_slice()),
        None => ("", &[][..]),
    };

    html! {
        h1 { (title) }
        br;
        @for paragraph in paragraphs {
            p { (paragraph) }
        }
        @for _ in 0..8 {
            br;
        }
        p { "Hosted on THIS server" }
        img src=(SERVER_PICTURE) alt="Server" class="server-pic";
    }
}

fn render_resume(jobs: &[Job]) -> Markup {
    html! {
        h1 { "Resume" }
        div id="resume-content" {
            @for job in jobs {
                br;
                div class="job" {
                    p {
                        strong { (job.position) }
                        " "
                        span style="float: right;" { strong { (job.duration) } }
                    }
                    p { (job.company) }
                    p { (job.responsibilities) }
                }
                br;
            }
        }
    }
}

fn render_portfolio(store: &ContentStore) -> Markup {
    html! {
        h1 { "Portfolio" }
        div id="portfolio-content" {
            br;
            strong { a { (PORTFOLIO_INTRO) } }
            br;
            @for section in PortfolioSection::ALL {
                br;
                h2 { (section.title()) }
                @if let Some(portfolio) = &store.portfolio {
                    @for entry in portfolio.section(section) {
                        (render_entry(entry))
                    }
                }
            }
        }
    }
}

fn render_entry(entry: &PortfolioEntry) -> Markup {
    html! {
        div class="portfolio-entry" {
            p {
                strong { a href=(entry.video_link) target="_blank" { (entry.video_name) } }
                span { " | " }
                a href=(entry.client_link) target="_blank" { (entry.client_name) }
                span style="float: right;" { (entry.view_count.to_string()) }
            }
            @for gif in &entry.gifs {
                a href=(gif.link) target="_blank" {
                    img src=(gif.file) alt=(entry.video_name) class="portfolio-gif";
                }
            }
        }
        br;
    }
}

fn render_contacts(contacts: Option<&Contacts>) -> Markup {
    let (email, phone) = contacts
        .map(|c| (c.email.as_str(), c.phone.as_str()))
        .unwrap_or_default();

    html! {
        h1 { "Contacts" }
        div id="contacts-content" {
            br;
            p { img src="/public/icons/email-icon.png" alt="Email" class="contact-icon"; " " (email) }
            p { img src="/public/icons/phone-icon.png" alt="Phone" class="contact-icon"; " " (phone) }
        }
    }
}

fn render_source() -> Markup {
    html! {
        marquee scrollamount="4" style="background-color: red;" {
            font color="white" size="3" {
                b { "All hope abandon, þe who enter here!!!" }
            }
        }
        div id="github-content" style="text-align: center; margin-top: 20px;" {
            a href=(SOURCE_URL) target="_blank" {
                img src=(SOURCE_LOGO) alt="GitHub" style="width: 200px;";
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Gif, Portfolio, ViewCount};

    fn job(position: &str) -> Job {
        Job {
            position: position.to_string(),
            company: "Acme".to_string(),
            duration: "2020-2022".to_string(),
            responsibilities: "Built things".to_string(),
        }
    }

    fn entry(name: &str, gifs: &[&str]) -> PortfolioEntry {
        PortfolioEntry {
            video_name: name.to_string(),
            video_link: format!("https://video/{name}"),
            client_name: "Client".to_string(),
            client_link: "https://client".to_string(),
            view_count: ViewCount::Label("10K".to_string()),
            gifs: gifs
                .iter()
                .map(|g| Gif {
                    file: format!("{g}.gif"),
                    link: format!("https://video/{name}#{g}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_resume_keeps_stored_order() {
        let mut store = ContentStore::new();
        store.jobs = Some(vec![job("Zeta"), job("Alpha")]);
        let html = render(View::Resume, &store).into_string();

        let zeta = html.find("Zeta").unwrap();
        let alpha = html.find("Alpha").unwrap();
        assert!(zeta < alpha);
        assert_eq!(html.matches("class=\"job\"").count(), 2);
    }

    #[test]
    fn test_portfolio_section_and_gif_order() {
        let mut store = ContentStore::new();
        store.portfolio = Some(Portfolio {
            three_d_animation: vec![entry("Render", &["r1"])],
            video_editing: vec![entry("CutB", &["b2", "b1"]), entry("CutA", &[])],
        });
        let html = render(View::Portfolio, &store).into_string();

        let needles = [
            "3D Animation",
            "Render",
            "Video Editing",
            "CutB",
            "b2.gif",
            "b1.gif",
            "CutA",
        ];
        let positions: Vec<usize> = needles
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(
            "<a href=\"https://video/CutB#b2\" target=\"_blank\"><img src=\"b2.gif\""
        ));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut store = ContentStore::new();
        store.jobs = Some(vec![job("<script>alert(1)</script>")]);
        let html = render(View::Resume, &store).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_source_ignores_store() {
        let empty = render(View::Source, &ContentStore::new()).into_string();
        assert!(empty.contains(SOURCE_URL));
        assert!(!View::Source.needs_content());
    }

    #[test]
    fn test_about_box() {
        let mut store = ContentStore::new();
        store.about = Some(About {
            title: "About".to_string(),
            content: vec!["One".to_string(), "Two".to_string()],
        });
        let html = render_about(&store).into_string();
        assert!(html.starts_with("<h1>About</h1>"));
        assert!(html.contains("<p>One</p><p>Two</p>"));
        assert!(html.contains("Hosted on THIS server"));
    }

    #[test]
    fn test_missing_content_renders_empty() {
        let store = ContentStore::new();
        assert_eq!(
            render(View::Resume, &store).into_string(),
            "<h1>Resume</h1><div id=\"resume-content\"></div>"
        );
        assert!(render(View::Contacts, &store)
            .into_string()
            .contains("<h1>Contacts</h1>"));
    }
}
