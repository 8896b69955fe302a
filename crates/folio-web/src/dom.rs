//! Page composer: builds the full DOM from the content catalog.
//!
//! Layout contract: the scene canvas sits in a fixed background layer; all
//! UI lives in one scrollable `<main>` on top of it. Section roots carry
//! their `SectionId` anchor ids, sections appear in enum order minus Home,
//! and the footer is always last. Visual treatment is left to the
//! stylesheet; this module only assigns classes, ids, and accent colors.

use folio_core::content::catalog::{
    self, CERTIFICATIONS, EDUCATION, HIGHLIGHTS, PROFILES, PROJECTS, SKILL_CATEGORIES,
};
use folio_core::content::types::{Icon, SectionId};
use folio_core::ui::form::CONTACT_EMAIL;
use folio_core::ui::scrollspy::NAV_LINKS;
use folio_core::ui::tilt::TiltConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

/// Handles the wiring layer needs after the page is built.
pub struct Page {
    /// The single scrolling container the scroll-spy watches.
    pub main: HtmlElement,
    pub canvas: HtmlCanvasElement,
    pub nav: HtmlElement,
    pub menu_button: HtmlElement,
    pub mobile_menu: HtmlElement,
    /// Brand plus desktop and mobile links, each with its anchor target.
    pub nav_links: Vec<(HtmlElement, SectionId)>,
    /// Tilt-reactive surfaces with their spring presets.
    pub tilt_cards: Vec<(HtmlElement, TiltConfig)>,
    /// Cards with a cursor-following spotlight gradient.
    pub spotlight_cards: Vec<HtmlElement>,
    pub form: HtmlElement,
    pub field_name: HtmlInputElement,
    pub field_email: HtmlInputElement,
    pub field_subject: HtmlInputElement,
    pub field_message: HtmlTextAreaElement,
}

// ── Element helpers ──────────────────────────────────────────────────

fn el(doc: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let element = doc.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

fn text_el(doc: &Document, tag: &str, class: &str, text: &str) -> Result<HtmlElement, JsValue> {
    let element = el(doc, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// Icon placeholder: the stylesheet's icon set picks up `data-lucide`.
fn icon(doc: &Document, which: Icon) -> Result<HtmlElement, JsValue> {
    let span = el(doc, "span", "icon")?;
    span.set_attribute("data-lucide", which.name())?;
    Ok(span)
}

fn tinted_icon(doc: &Document, which: Icon, color: &str) -> Result<HtmlElement, JsValue> {
    let span = icon(doc, which)?;
    span.style().set_property("color", color)?;
    Ok(span)
}

/// Outbound link: opens in a new browsing context, opaque to this system.
fn external_link(doc: &Document, class: &str, href: &str) -> Result<HtmlElement, JsValue> {
    let a = el(doc, "a", class)?;
    a.set_attribute("href", href)?;
    a.set_attribute("target", "_blank")?;
    a.set_attribute("rel", "noopener noreferrer")?;
    Ok(a)
}

fn tag_chip(doc: &Document, text: &str) -> Result<HtmlElement, JsValue> {
    text_el(doc, "span", "tag-chip", text)
}

// ── Page assembly ────────────────────────────────────────────────────

pub fn build_page(doc: &Document, body: &HtmlElement) -> Result<Page, JsValue> {
    let root = el(doc, "div", "app-root")?;

    // Background layer: non-scrolling, pointer input forwarded separately.
    let scene_layer = el(doc, "div", "scene-layer")?;
    let canvas = doc
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(JsValue::from)?;
    canvas.set_class_name("scene-canvas");
    scene_layer.append_child(&canvas)?;

    // Foreground layer: the one scrolling container.
    let main = el(doc, "main", "content-layer")?;

    let mut nav_links = Vec::new();
    let mut tilt_cards = Vec::new();
    let mut spotlight_cards = Vec::new();

    let (nav, menu_button, mobile_menu) = build_navbar(doc, &mut nav_links)?;
    main.append_child(&nav)?;

    let container = el(doc, "div", "page-container")?;
    container.append_child(&build_hero(doc, &mut tilt_cards)?.into())?;

    let stack = el(doc, "div", "section-stack")?;
    stack.append_child(&build_about(doc)?.into())?;
    stack.append_child(&build_work(doc, &mut spotlight_cards)?.into())?;
    stack.append_child(&build_achievements(doc, &mut tilt_cards)?.into())?;
    let contact = build_contact(doc)?;
    stack.append_child(&contact.section)?;
    container.append_child(&stack)?;
    main.append_child(&container)?;
    main.append_child(&build_footer(doc)?.into())?;

    root.append_child(&scene_layer)?;
    root.append_child(&main)?;
    body.append_child(&root)?;

    Ok(Page {
        main,
        canvas,
        nav,
        menu_button,
        mobile_menu,
        nav_links,
        tilt_cards,
        spotlight_cards,
        form: contact.form,
        field_name: contact.name,
        field_email: contact.email,
        field_subject: contact.subject,
        field_message: contact.message,
    })
}

// ── Navigation bar ───────────────────────────────────────────────────

fn build_navbar(
    doc: &Document,
    nav_links: &mut Vec<(HtmlElement, SectionId)>,
) -> Result<(HtmlElement, HtmlElement, HtmlElement), JsValue> {
    let nav = el(doc, "nav", "navbar")?;
    let inner = el(doc, "div", "navbar-inner")?;

    let brand = el(doc, "a", "brand")?;
    brand.set_attribute("href", "#")?;
    brand.set_text_content(Some(catalog::BRAND));
    nav_links.push((brand.clone(), SectionId::Home));
    inner.append_child(&brand)?;

    let desktop = el(doc, "div", "nav-links")?;
    for (label, id) in NAV_LINKS.iter() {
        let link = el(doc, "a", "nav-link")?;
        link.set_attribute("href", &format!("#{}", id.as_str()))?;
        link.set_text_content(Some(label));
        nav_links.push((link.clone(), *id));
        desktop.append_child(&link)?;
    }
    inner.append_child(&desktop)?;

    let menu_button = el(doc, "button", "menu-toggle")?;
    menu_button.set_attribute("type", "button")?;
    menu_button.append_child(&icon(doc, Icon::Menu)?.into())?;
    inner.append_child(&menu_button)?;
    nav.append_child(&inner)?;

    let mobile = el(doc, "div", "mobile-menu")?;
    for (label, id) in NAV_LINKS.iter() {
        let link = el(doc, "a", "mobile-link")?;
        link.set_attribute("href", &format!("#{}", id.as_str()))?;
        link.set_text_content(Some(label));
        nav_links.push((link.clone(), *id));
        mobile.append_child(&link)?;
    }
    nav.append_child(&mobile)?;

    Ok((nav, menu_button, mobile))
}

// ── Hero ─────────────────────────────────────────────────────────────

fn build_hero(
    doc: &Document,
    tilt_cards: &mut Vec<(HtmlElement, TiltConfig)>,
) -> Result<HtmlElement, JsValue> {
    let section = el(doc, "section", "hero")?;
    section.set_id(SectionId::Home.as_str());

    let panel = el(doc, "div", "hero-panel")?;
    tilt_cards.push((panel.clone(), TiltConfig::HERO));

    let badge = el(doc, "div", "hero-badge")?;
    badge.append_child(&icon(doc, Icon::Code2)?.into())?;
    badge.append_child(&text_el(doc, "span", "", catalog::HERO_BADGE)?.into())?;
    panel.append_child(&badge)?;

    let heading = el(doc, "h1", "hero-heading")?;
    heading.append_child(&text_el(doc, "span", "", "I am ")?.into())?;
    heading.append_child(&text_el(doc, "span", "hero-name", catalog::HERO_NAME)?.into())?;
    heading.append_child(&text_el(doc, "span", "", ".")?.into())?;
    panel.append_child(&heading)?;

    panel.append_child(&text_el(doc, "p", "hero-tagline", catalog::HERO_TAGLINE)?.into())?;

    let actions = el(doc, "div", "hero-actions")?;
    let mail = el(doc, "a", "hero-cta")?;
    mail.set_attribute("href", &format!("mailto:{}", CONTACT_EMAIL))?;
    mail.append_child(&icon(doc, Icon::Mail)?.into())?;
    mail.append_child(&text_el(doc, "span", "", "Get in touch")?.into())?;
    actions.append_child(&mail)?;

    let linkedin = external_link(doc, "hero-social", catalog::LINKEDIN_URL)?;
    linkedin.append_child(&icon(doc, Icon::Linkedin)?.into())?;
    actions.append_child(&linkedin)?;

    let github = external_link(doc, "hero-social", catalog::GITHUB_URL)?;
    github.append_child(&icon(doc, Icon::Github)?.into())?;
    actions.append_child(&github)?;
    panel.append_child(&actions)?;

    section.append_child(&panel)?;
    Ok(section)
}

// ── About: education, skills, highlights ─────────────────────────────

fn build_about(doc: &Document) -> Result<HtmlElement, JsValue> {
    let section = el(doc, "section", "about")?;
    section.set_id(SectionId::About.as_str());

    section.append_child(&text_el(doc, "h2", "section-title", "Education")?.into())?;
    let education = el(doc, "div", "education-grid")?;
    for entry in EDUCATION.iter() {
        let card = el(doc, "article", "education-card")?;
        card.append_child(&tinted_icon(doc, entry.icon, entry.color)?.into())?;

        let status = text_el(doc, "div", "status-chip", entry.status.label())?;
        card.append_child(&status)?;

        card.append_child(&text_el(doc, "h3", "card-title", entry.title)?.into())?;
        let place = el(doc, "div", "card-place")?;
        place.append_child(&icon(doc, Icon::MapPin)?.into())?;
        place.append_child(&text_el(doc, "span", "", entry.institution)?.into())?;
        card.append_child(&place)?;

        if let Some(description) = entry.description {
            card.append_child(&text_el(doc, "p", "card-desc", description)?.into())?;
        }
        if let Some(grade) = entry.grade {
            let footer = el(doc, "div", "card-grade")?;
            footer.append_child(&tinted_icon(doc, Icon::Award, entry.color)?.into())?;
            footer.append_child(&text_el(doc, "span", "", grade)?.into())?;
            card.append_child(&footer)?;
        } else {
            card.append_child(&text_el(doc, "span", "card-kind", entry.kind)?.into())?;
        }
        education.append_child(&card)?;
    }
    section.append_child(&education)?;

    section.append_child(&text_el(doc, "h2", "section-title", "Technical Skills")?.into())?;
    for category in SKILL_CATEGORIES.iter() {
        section.append_child(&text_el(doc, "h3", "category-title", category.title)?.into())?;
        let grid = el(doc, "div", "skill-grid")?;
        for skill in category.skills {
            let chip = el(doc, "div", "skill-chip")?;
            chip.append_child(&tinted_icon(doc, skill.icon, skill.color)?.into())?;
            chip.append_child(&text_el(doc, "span", "skill-name", skill.name)?.into())?;
            chip.append_child(&text_el(doc, "span", "skill-tag", skill.tag)?.into())?;
            grid.append_child(&chip)?;
        }
        section.append_child(&grid)?;
    }

    section.append_child(&text_el(doc, "h3", "category-title", "Current Status")?.into())?;
    let highlights = el(doc, "div", "highlight-grid")?;
    for item in HIGHLIGHTS.iter() {
        let card = el(doc, "div", "highlight-card")?;
        card.append_child(&text_el(doc, "span", "highlight-label", item.label)?.into())?;
        card.append_child(&tinted_icon(doc, item.icon, item.color)?.into())?;
        card.append_child(&text_el(doc, "div", "highlight-value", item.value)?.into())?;
        highlights.append_child(&card)?;
    }
    section.append_child(&highlights)?;

    Ok(section)
}

// ── Work: project catalog ────────────────────────────────────────────

fn build_work(
    doc: &Document,
    spotlight_cards: &mut Vec<HtmlElement>,
) -> Result<HtmlElement, JsValue> {
    let section = el(doc, "section", "work")?;
    section.set_id(SectionId::Work.as_str());
    section.append_child(&text_el(doc, "h2", "section-title", "Featured Projects")?.into())?;

    let list = el(doc, "div", "project-list")?;
    for project in PROJECTS.iter() {
        let card = el(doc, "article", "project-card")?;
        card.set_attribute("data-project-id", &project.id.to_string())?;
        // Spotlight tint follows the project accent.
        card.style().set_property("--spot-color", project.color)?;
        spotlight_cards.push(card.clone());

        card.append_child(&tinted_icon(doc, project.icon, project.color)?.into())?;
        card.append_child(&text_el(doc, "h3", "card-title", project.title)?.into())?;

        let open = external_link(doc, "project-open", project.link)?;
        open.append_child(&icon(doc, Icon::ArrowUpRight)?.into())?;
        card.append_child(&open)?;

        card.append_child(&text_el(doc, "p", "card-desc", project.description)?.into())?;

        let tags = el(doc, "div", "tag-row")?;
        for tag in project.tags {
            tags.append_child(&tag_chip(doc, tag)?.into())?;
        }
        card.append_child(&tags)?;

        let source = external_link(doc, "project-source", project.link)?;
        source.append_child(&icon(doc, Icon::Github)?.into())?;
        source.append_child(&text_el(doc, "span", "", "Source Code")?.into())?;
        card.append_child(&source)?;

        list.append_child(&card)?;
    }
    section.append_child(&list)?;
    Ok(section)
}

// ── Achievements: coding profiles and certifications ─────────────────

fn build_achievements(
    doc: &Document,
    tilt_cards: &mut Vec<(HtmlElement, TiltConfig)>,
) -> Result<HtmlElement, JsValue> {
    let section = el(doc, "section", "achievements")?;
    section.set_id(SectionId::Achievements.as_str());

    section.append_child(&text_el(doc, "h2", "section-title", "Coding Profiles")?.into())?;
    let profiles = el(doc, "div", "profile-grid")?;
    for profile in PROFILES.iter() {
        let card = external_link(doc, "profile-card", profile.link)?;
        card.set_attribute("data-gradient", profile.gradient)?;
        tilt_cards.push((card.clone(), TiltConfig::CARD));

        card.append_child(&tinted_icon(doc, profile.icon, profile.color)?.into())?;
        card.append_child(&text_el(doc, "h3", "card-title", profile.name)?.into())?;
        card.append_child(&text_el(doc, "p", "card-subtitle", profile.specialty)?.into())?;
        profiles.append_child(&card)?;
    }
    section.append_child(&profiles)?;

    section.append_child(&text_el(doc, "h2", "section-title", "Certifications")?.into())?;
    let certs = el(doc, "div", "cert-grid")?;
    for cert in CERTIFICATIONS.iter() {
        let card = external_link(doc, "cert-card", cert.link)?;
        tilt_cards.push((card.clone(), TiltConfig::CERT));
        card.append_child(&tinted_icon(doc, cert.icon, cert.color)?.into())?;
        card.append_child(&text_el(doc, "h3", "card-title", cert.title)?.into())?;
        card.append_child(&text_el(
            doc,
            "p",
            "card-subtitle",
            &format!("{} · {}", cert.issuer, cert.date),
        )?.into())?;
        card.append_child(&text_el(doc, "p", "card-desc", cert.description)?.into())?;
        card.append_child(&text_el(doc, "span", "badge", cert.badge)?.into())?;
        certs.append_child(&card)?;
    }
    section.append_child(&certs)?;

    Ok(section)
}

// ── Contact ──────────────────────────────────────────────────────────

struct ContactHandles {
    section: HtmlElement,
    form: HtmlElement,
    name: HtmlInputElement,
    email: HtmlInputElement,
    subject: HtmlInputElement,
    message: HtmlTextAreaElement,
}

fn labeled_input(
    doc: &Document,
    parent: &HtmlElement,
    id: &str,
    label: &str,
    input_type: &str,
    placeholder: &str,
) -> Result<HtmlInputElement, JsValue> {
    let field = el(doc, "div", "form-field")?;
    let label_el = text_el(doc, "label", "field-label", label)?;
    label_el.set_attribute("for", id)?;
    field.append_child(&label_el)?;

    let input = doc
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()
        .map_err(JsValue::from)?;
    input.set_id(id);
    input.set_name(id);
    input.set_type(input_type);
    input.set_placeholder(placeholder);
    input.set_required(true);
    field.append_child(&input)?;
    parent.append_child(&field)?;
    Ok(input)
}

fn build_contact(doc: &Document) -> Result<ContactHandles, JsValue> {
    let section = el(doc, "section", "contact")?;
    section.set_id(SectionId::Contact.as_str());

    let intro = el(doc, "div", "contact-intro")?;
    intro.append_child(&text_el(doc, "h2", "section-title", "Let's Work Together")?.into())?;
    intro.append_child(&text_el(
        doc,
        "p",
        "card-desc",
        "Have a project in mind? I'd love to hear about it and discuss how we can bring \
         your ideas to life. Open to opportunities, creative projects, or just a chat.",
    )?.into())?;

    let mail = el(doc, "a", "contact-link")?;
    mail.set_attribute("href", &format!("mailto:{}", CONTACT_EMAIL))?;
    mail.append_child(&icon(doc, Icon::Mail)?.into())?;
    mail.append_child(&text_el(doc, "span", "", CONTACT_EMAIL)?.into())?;
    intro.append_child(&mail)?;

    let linkedin = external_link(doc, "contact-link", catalog::LINKEDIN_URL)?;
    linkedin.append_child(&icon(doc, Icon::Linkedin)?.into())?;
    linkedin.append_child(&text_el(doc, "span", "", "LinkedIn")?.into())?;
    intro.append_child(&linkedin)?;

    let github = external_link(doc, "contact-link", catalog::GITHUB_URL)?;
    github.append_child(&icon(doc, Icon::Github)?.into())?;
    github.append_child(&text_el(doc, "span", "", "GitHub")?.into())?;
    intro.append_child(&github)?;
    section.append_child(&intro)?;

    let form = el(doc, "form", "contact-form")?;
    let name = labeled_input(doc, &form, "name", "Name", "text", "Your name")?;
    let email = labeled_input(doc, &form, "email", "Email", "email", "your@email.com")?;
    let subject = labeled_input(doc, &form, "subject", "Subject", "text", "Project inquiry")?;

    let field = el(doc, "div", "form-field")?;
    let label = text_el(doc, "label", "field-label", "Message")?;
    label.set_attribute("for", "message")?;
    field.append_child(&label)?;
    let message = doc
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(JsValue::from)?;
    message.set_id("message");
    message.set_name("message");
    message.set_placeholder("Tell me about your project...");
    message.set_required(true);
    message.set_rows(4);
    field.append_child(&message)?;
    form.append_child(&field)?;

    let submit = el(doc, "button", "submit-button")?;
    submit.set_attribute("type", "submit")?;
    submit.append_child(&icon(doc, Icon::Send)?.into())?;
    submit.append_child(&text_el(doc, "span", "", "Send Message")?.into())?;
    form.append_child(&submit)?;
    section.append_child(&form)?;

    Ok(ContactHandles {
        section,
        form,
        name,
        email,
        subject,
        message,
    })
}

// ── Footer ───────────────────────────────────────────────────────────

fn build_footer(doc: &Document) -> Result<HtmlElement, JsValue> {
    let year = js_sys::Date::new_0().get_full_year();
    text_el(
        doc,
        "footer",
        "footer",
        &format!("© {} Animadik Singh. Built with Rust & WebAssembly.", year),
    )
}
