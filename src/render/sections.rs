// One component per page section. Each reads only its registry and the props it is given.

use crate::adapters::emailjs::send_url;
use crate::config::RelayConfig;
use crate::content::registry::{
    ABOUT_HIGHLIGHTS, ABOUT_PARAGRAPHS, AVAILABILITY, CONTACT_BLURB, CONTACT_DETAILS, CV_STATS,
    EDUCATION, EDUCATION_NOTE, EXPERIENCES, HEADLINE, LANGUAGES, OWNER_NAME, PORTFOLIO_ITEMS,
    SKILL_CATEGORIES, SOCIAL_LINKS, TAGLINE, TALENTS,
};
use crate::core::filter::PortfolioFilter;
use crate::core::section::Section;
use crate::domain::model::{ActiveCategory, ContactForm, CvDocument, PortfolioItem, Toast};
use crate::render::page::page_file;
use leptos::prelude::*;

fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{} reveal is-visible", base)
    } else {
        format!("{} reveal", base)
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="section-header">
            <h2 class="section-title">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </header>
    }
}

#[component]
fn Chips(values: &'static [&'static str], kind: &'static str) -> impl IntoView {
    view! {
        <ul class=kind>
            {values.iter().map(|value| view! { <li>{*value}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn HeroSection(visible: bool) -> impl IntoView {
    view! {
        <section id=Section::Hero.anchor() class=reveal_class("hero", visible) data-reveal="">
            <p class="availability">{AVAILABILITY}</p>
            <h1>
                {HEADLINE}
                <br />
                <span class="gradient-text">{OWNER_NAME}</span>
            </h1>
            <p class="tagline">{TAGLINE}</p>
            <Chips values=TALENTS kind="talents" />
            <nav class="cta">
                <a class="btn btn-hero" href=format!("#{}", Section::Portfolio.anchor())>
                    "View My Work"
                </a>
                <a class="btn btn-hero-outline" href=format!("#{}", Section::Contact.anchor())>
                    "Let's Connect"
                </a>
            </nav>
            <a
                class="scroll-indicator"
                href=format!("#{}", Section::About.anchor())
                aria-label="Scroll down"
            ></a>
        </section>
    }
}

#[component]
pub fn AboutSection(visible: bool) -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class=reveal_class("about", visible) data-reveal="">
            <SectionHeading title="About Me" subtitle="The story behind the creations" />
            <div class="bio">
                {ABOUT_PARAGRAPHS.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                <h3>"Languages"</h3>
                <ul class="languages">
                    {LANGUAGES
                        .iter()
                        .map(|language| {
                            view! {
                                <li>
                                    {language.name}
                                    <span class="level">{language.level}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="highlights">
                {ABOUT_HIGHLIGHTS
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="card">
                                <h3>{item.title}</h3>
                                <p>{item.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CategoryButton(category: ActiveCategory, selected: bool) -> impl IntoView {
    let class = if selected { "btn btn-hero" } else { "btn btn-outline" };
    let pressed = if selected { "true" } else { "false" };
    view! {
        <a
            class=class
            href=format!("{}#{}", page_file(category), Section::Portfolio.anchor())
            aria-pressed=pressed
        >
            {category.label()}
        </a>
    }
}

#[component]
fn PortfolioCard(item: &'static PortfolioItem) -> impl IntoView {
    view! {
        <article
            class="card"
            data-item-id=item.id.to_string()
            data-category=item.category.as_str()
        >
            <img src=item.image alt=item.title loading="lazy" />
            <a class="btn btn-hero" href=item.url target="_blank" rel="noopener noreferrer">
                {item.call_to_action()}
            </a>
            <h3>{item.title.trim()}</h3>
            <p>{item.description}</p>
            <Chips values=item.tags kind="tags" />
        </article>
    }
}

#[component]
pub fn PortfolioSection(visible: bool, filter: PortfolioFilter) -> impl IntoView {
    let active = filter.active();
    view! {
        <section
            id=Section::Portfolio.anchor()
            class=reveal_class("portfolio", visible)
            data-reveal=""
        >
            <SectionHeading title="Portfolio" subtitle="A showcase of my creative work" />
            <nav class="category-filter">
                {ActiveCategory::ALL
                    .into_iter()
                    .map(|category| {
                        let selected = category == active;
                        view! { <CategoryButton category=category selected=selected /> }
                    })
                    .collect_view()}
            </nav>
            <div class="portfolio-grid">
                {filter
                    .visible(PORTFOLIO_ITEMS)
                    .into_iter()
                    .map(|item| view! { <PortfolioCard item=item /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection(visible: bool) -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor() class=reveal_class("skills", visible) data-reveal="">
            <SectionHeading
                title="Skills & Expertise"
                subtitle="The tools and talents I bring to every project"
            />
            <div class="skill-categories">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <div class="card" data-color=category.color>
                                <h3>{category.title}</h3>
                                {category
                                    .skills
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <div
                                                class="skill-bar"
                                                style=format!("--level: {}%", skill.level)
                                            >
                                                <span>{skill.name}</span>
                                                <span>{format!("{}%", skill.level)}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <h3>"Languages"</h3>
            <div class="language-rings">
                {LANGUAGES
                    .iter()
                    .map(|language| {
                        view! {
                            <div class="ring" style=format!("--percent: {}", language.percent)>
                                <span>{format!("{}%", language.percent)}</span>
                                <p>{language.name}</p>
                                <p class="level">{language.level}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection(visible: bool) -> impl IntoView {
    view! {
        <section
            id=Section::Experience.anchor()
            class=reveal_class("experience", visible)
            data-reveal=""
        >
            <SectionHeading title="Experience" subtitle="My journey and professional background" />
            <ol class="timeline">
                {EXPERIENCES
                    .iter()
                    .enumerate()
                    .map(|(index, exp)| {
                        let side = if index % 2 == 0 { "timeline-left" } else { "timeline-right" };
                        view! {
                            <li class=side data-experience-id=exp.id.to_string()>
                                <h3>{exp.title}</h3>
                                {exp.company.map(|company| view! { <p class="company">{company}</p> })}
                                <span class="period">{exp.period}</span>
                                <p>{exp.description}</p>
                                <Chips values=exp.highlights kind="highlights" />
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
pub fn EducationSection(visible: bool) -> impl IntoView {
    view! {
        <section
            id=Section::Education.anchor()
            class=reveal_class("education", visible)
            data-reveal=""
        >
            <SectionHeading title="Education" subtitle="Academic background and ongoing learning" />
            <div class="education-cards">
                {EDUCATION
                    .iter()
                    .map(|edu| {
                        let badge = if edu.is_current() { "badge badge-current" } else { "badge badge-upcoming" };
                        view! {
                            <div class="card" data-education-id=edu.id.to_string()>
                                <span class=badge>{edu.status}</span>
                                <h3>{edu.degree}</h3>
                                <p class="institution">{edu.institution}</p>
                                <p>{edu.description}</p>
                                <h4>"Key Areas"</h4>
                                <Chips values=edu.courses kind="courses" />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="note">
                <h3>"Continuous Self-Learning"</h3>
                <p>{EDUCATION_NOTE}</p>
            </div>
        </section>
    }
}

#[component]
pub fn CvSection(visible: bool, cv: CvDocument) -> impl IntoView {
    let download = Toast::CV_DOWNLOAD;
    let view_url = cv.url.clone();
    view! {
        <section id=Section::Cv.anchor() class=reveal_class("cv", visible) data-reveal="">
            <h2 class="section-title">"Download My CV"</h2>
            <p>
                "Get a comprehensive overview of my skills, experience, and qualifications. Available in PDF format for easy viewing and sharing."
            </p>
            <a
                class="btn btn-hero"
                href=cv.url
                download=cv.download_name
                data-toast-title=download.title
                data-toast-description=download.description
            >
                "Download CV"
            </a>
            <a class="btn btn-hero-outline" href=view_url target="_blank" rel="noopener noreferrer">
                "View Online"
            </a>
            <dl class="stats">
                {CV_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div>
                                <dt>{stat.value}</dt>
                                <dd>{stat.label}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}

/// Contact details, the toast slot and the form.
///
/// The form carries the relay wiring as `data-*` attributes; the page's submit
/// script reads them to send the owner notification and then the auto-reply.
#[component]
pub fn ContactSection(
    visible: bool,
    form: ContactForm,
    toast: Option<Toast>,
    relay: RelayConfig,
) -> impl IntoView {
    let hidden = toast.is_none();
    let (toast_title, toast_description) = toast
        .map(|t| (t.title, t.description))
        .unwrap_or_default();
    let sent = Toast::MESSAGE_SENT;
    let failed = Toast::MESSAGE_FAILED;
    let relay_url = send_url(&relay.endpoint);
    let RelayConfig {
        service_id,
        public_key,
        owner_template_id,
        auto_reply_template_id,
        ..
    } = relay;

    view! {
        <section id=Section::Contact.anchor() class=reveal_class("contact", visible) data-reveal="">
            <SectionHeading title="Get in Touch" subtitle="Let's create something amazing together" />
            <div class="contact-info">
                <h3>"Let's Connect"</h3>
                <p>{CONTACT_BLURB}</p>
                <dl>
                    {CONTACT_DETAILS
                        .iter()
                        .map(|detail| {
                            view! {
                                <div>
                                    <dt>{detail.label}</dt>
                                    <dd>{detail.value}</dd>
                                </div>
                            }
                        })
                        .collect_view()}
                </dl>
                <h4>"Follow Me"</h4>
                <nav class="social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href aria-label=link.name>{link.name}</a> })
                        .collect_view()}
                </nav>
            </div>
            <div id="contact-toast" class="toast" role="status" hidden=hidden>
                <strong>{toast_title}</strong>
                <p>{toast_description}</p>
            </div>
            <form
                id="contact-form"
                class="contact-form"
                method="post"
                data-relay-url=relay_url
                data-service-id=service_id
                data-public-key=public_key
                data-owner-template=owner_template_id
                data-auto-reply-template=auto_reply_template_id
                data-sent-title=sent.title
                data-sent-description=sent.description
                data-failed-title=failed.title
                data-failed-description=failed.description
            >
                <input name="name" type="text" placeholder="Your Name" value=form.name required=true />
                <input
                    name="email"
                    type="email"
                    placeholder="Your Email"
                    value=form.email
                    required=true
                />
                <input
                    name="subject"
                    type="text"
                    placeholder="Subject"
                    value=form.subject
                    required=true
                />
                <textarea name="message" placeholder="Your Message" rows="6" required=true>
                    {form.message}
                </textarea>
                <button type="submit" class="btn btn-hero">
                    "Send Message"
                </button>
            </form>
        </section>
    }
}

#[component]
pub fn Footer(year: i32, title: String) -> impl IntoView {
    view! {
        <footer>
            <p>{format!("© {} {}. Made with ♥ and creativity.", year, title)}</p>
            <a class="btn btn-outline" href=format!("#{}", Section::Hero.anchor())>
                "Back to Top"
            </a>
        </footer>
    }
}
