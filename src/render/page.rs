use crate::config::{RelayConfig, SiteConfig};
use crate::core::filter::PortfolioFilter;
use crate::core::section::Section;
use crate::core::visibility::SectionVisibility;
use crate::domain::model::{ActiveCategory, ContactForm, CvDocument, Toast};
use crate::domain::ports::Storage;
use crate::render::sections::{
    AboutSection, ContactSection, CvSection, EducationSection, ExperienceSection, Footer,
    HeroSection, PortfolioSection, SkillsSection,
};
use crate::utils::error::Result;
use chrono::Datelike;
use leptos::prelude::*;

/// Browser half of the visibility latch: reveal once, then stop observing.
const REVEAL_SCRIPT: &str = r#"
(function () {
  var targets = document.querySelectorAll("[data-reveal]:not(.is-visible)");
  if (!("IntersectionObserver" in window)) {
    targets.forEach(function (el) { el.classList.add("is-visible"); });
    return;
  }
  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        entry.target.classList.add("is-visible");
        observer.unobserve(entry.target);
      }
    });
  }, { rootMargin: "-100px" });
  targets.forEach(function (el) { observer.observe(el); });
})();
"#;

/// Browser half of the contact flow. Runs after the `required`/`type="email"`
/// checks pass: owner template first, auto-reply only after it succeeded, fields
/// reset only when both did.
const CONTACT_SCRIPT: &str = r#"
(function () {
  var form = document.getElementById("contact-form");
  var toast = document.getElementById("contact-toast");
  if (!form || !toast) return;
  var data = form.dataset;

  function showToast(title, description) {
    toast.querySelector("strong").textContent = title;
    toast.querySelector("p").textContent = description;
    toast.hidden = false;
  }

  function send(templateId, params) {
    return fetch(data.relayUrl, {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({
        service_id: data.serviceId,
        template_id: templateId,
        user_id: data.publicKey,
        template_params: params
      })
    }).then(function (res) {
      if (!res.ok) {
        return res.text().then(function (body) {
          throw new Error(templateId + " rejected (" + res.status + "): " + body);
        });
      }
    });
  }

  form.addEventListener("submit", function (event) {
    event.preventDefault();
    var params = {
      name: form.elements.namedItem("name").value,
      email: form.elements.namedItem("email").value,
      subject: form.elements.namedItem("subject").value,
      message: form.elements.namedItem("message").value
    };
    send(data.ownerTemplate, params)
      .then(function () { return send(data.autoReplyTemplate, params); })
      .then(function () {
        form.reset();
        showToast(data.sentTitle, data.sentDescription);
      })
      .catch(function (err) {
        console.error("Contact submission failed:", err);
        showToast(data.failedTitle, data.failedDescription);
      });
  });
})();
"#;

/// File a gallery filter state is rendered to. Filter buttons link between these.
pub fn page_file(category: ActiveCategory) -> String {
    match category {
        ActiveCategory::All => "index.html".to_string(),
        other => format!("portfolio-{}.html", other.as_str()),
    }
}

/// Whole-page state: everything the section components read.
#[derive(Debug, Clone)]
pub struct Page {
    title: String,
    filter: PortfolioFilter,
    visibility: SectionVisibility,
    form: ContactForm,
    toast: Option<Toast>,
    cv: CvDocument,
    relay: RelayConfig,
    year: i32,
}

impl Page {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            title: config.site.title.clone(),
            filter: PortfolioFilter::default(),
            visibility: SectionVisibility::new(),
            form: ContactForm::default(),
            toast: None,
            cv: config.cv(),
            relay: config.relay.clone(),
            year: chrono::Local::now().year(),
        }
    }

    pub fn with_category(mut self, category: ActiveCategory) -> Self {
        self.filter.select(category);
        self
    }

    pub fn with_visibility(mut self, visibility: SectionVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_form(mut self, form: ContactForm) -> Self {
        self.form = form;
        self
    }

    pub fn with_toast(mut self, toast: Option<Toast>) -> Self {
        self.toast = toast;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    fn section_view(&self, section: Section) -> AnyView {
        let visible = self.visibility.is_visible(section);
        match section {
            Section::Hero => view! { <HeroSection visible=visible /> }.into_any(),
            Section::About => view! { <AboutSection visible=visible /> }.into_any(),
            Section::Portfolio => {
                view! { <PortfolioSection visible=visible filter=self.filter /> }.into_any()
            }
            Section::Skills => view! { <SkillsSection visible=visible /> }.into_any(),
            Section::Experience => view! { <ExperienceSection visible=visible /> }.into_any(),
            Section::Education => view! { <EducationSection visible=visible /> }.into_any(),
            Section::Cv => view! { <CvSection visible=visible cv=self.cv.clone() /> }.into_any(),
            Section::Contact => view! {
                <ContactSection
                    visible=visible
                    form=self.form.clone()
                    toast=self.toast.clone()
                    relay=self.relay.clone()
                />
            }
            .into_any(),
        }
    }

    /// Server-renders one section to HTML.
    pub fn render_section(&self, section: Section) -> String {
        Owner::new().with(|| self.section_view(section).to_html())
    }

    pub fn render(&self) -> String {
        let html = Owner::new().with(|| {
            let sections = Section::ORDER
                .iter()
                .map(|section| self.section_view(*section))
                .collect_view();
            view! {
                <html lang="en">
                    <head>
                        <meta charset="utf-8" />
                        <meta name="viewport" content="width=device-width, initial-scale=1" />
                        <title>{self.title.clone()}</title>
                    </head>
                    <body class="min-h-screen bg-background">
                        <main>{sections}</main>
                        <Footer year=self.year title=self.title.clone() />
                        <script inner_html=REVEAL_SCRIPT></script>
                        <script inner_html=CONTACT_SCRIPT></script>
                    </body>
                </html>
            }
            .to_html()
        });
        format!("<!DOCTYPE html>{}", html)
    }

    /// Writes the current filter state to its page file.
    pub async fn write_to<S: Storage>(&self, storage: &S) -> Result<String> {
        let file = page_file(self.filter.active());
        let html = self.render();
        tracing::debug!("Writing {} ({} bytes)", file, html.len());
        storage.write_file(&file, html.as_bytes()).await
    }
}
