use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent};

use super::gallery::{Gallery, LightboxCommand, PortfolioImage};
use crate::error::SiteResult;
use crate::utils::dom;

pub const ITEM_SELECTOR: &str = ".portfolio-item";

const ROOT_ID: &str = "portfolioLightbox";
const IMAGE_ID: &str = "lightboxImage";
const TITLE_ID: &str = "lightboxTitle";
const DESCRIPTION_ID: &str = "lightboxDescription";
const STYLE_ID: &str = "lightboxCSS";

const LIGHTBOX_HTML: &str = r#"
<div id="portfolioLightbox" class="lightbox" style="display: none;">
    <div class="lightbox-overlay" data-action="close-lightbox"></div>
    <div class="lightbox-content">
        <button type="button" class="lightbox-close" data-action="close-lightbox">&times;</button>
        <button type="button" class="lightbox-prev" data-action="previous-image">&lsaquo;</button>
        <button type="button" class="lightbox-next" data-action="next-image">&rsaquo;</button>
        <img id="lightboxImage" src="" alt="">
        <div class="lightbox-info">
            <h3 id="lightboxTitle"></h3>
            <p id="lightboxDescription"></p>
        </div>
    </div>
</div>
"#;

const LIGHTBOX_CSS: &str = r#"
.lightbox {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background: rgba(0, 0, 0, 0.95);
    z-index: 3000;
    display: flex;
    align-items: center;
    justify-content: center;
    opacity: 0;
    animation: fadeIn 0.3s ease forwards;
}
.lightbox-overlay {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    cursor: pointer;
}
.lightbox-content {
    position: relative;
    max-width: 90%;
    max-height: 90%;
    display: flex;
    flex-direction: column;
    align-items: center;
    transform: scale(0.8);
    animation: scaleIn 0.3s ease forwards;
}
.lightbox-close {
    position: absolute;
    top: -50px;
    right: 0;
    background: none;
    border: none;
    color: white;
    font-size: 3rem;
    cursor: pointer;
    z-index: 3001;
    transition: all 0.3s ease;
}
.lightbox-close:hover {
    color: #d4af37;
    transform: rotate(90deg);
}
.lightbox-prev,
.lightbox-next {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    background: rgba(255, 255, 255, 0.1);
    border: 2px solid rgba(255, 255, 255, 0.3);
    color: white;
    font-size: 2rem;
    cursor: pointer;
    padding: 15px 20px;
    border-radius: 50px;
    transition: all 0.3s ease;
}
.lightbox-prev:hover,
.lightbox-next:hover {
    background: rgba(212, 175, 55, 0.8);
    border-color: #d4af37;
    transform: translateY(-50%) scale(1.1);
}
.lightbox-prev { left: -80px; }
.lightbox-next { right: -80px; }
#lightboxImage {
    max-width: 100%;
    max-height: 70vh;
    object-fit: contain;
    border-radius: 10px;
    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);
}
.lightbox-info {
    text-align: center;
    color: white;
    margin-top: 30px;
    max-width: 600px;
}
.lightbox-info h3 {
    font-size: 1.8rem;
    margin-bottom: 10px;
    color: #d4af37;
}
.lightbox-info p {
    font-size: 1.2rem;
    opacity: 0.9;
}
.portfolio-instruction {
    margin-top: 20px;
    padding: 15px 25px;
    background: rgba(212, 175, 55, 0.1);
    border-radius: 25px;
    display: inline-flex;
    align-items: center;
    gap: 10px;
    font-weight: 500;
    color: #d4af37;
}
.click-indicator {
    position: absolute;
    top: 20px;
    right: 20px;
    background: rgba(212, 175, 55, 0.9);
    color: white;
    padding: 10px;
    border-radius: 50%;
    font-size: 1.2rem;
    opacity: 0;
    transition: all 0.3s ease;
}
.portfolio-item:hover .click-indicator {
    opacity: 1;
    transform: scale(1.1);
}
@keyframes fadeIn { to { opacity: 1; } }
@keyframes scaleIn { to { transform: scale(1); } }
@media (max-width: 768px) {
    .lightbox-prev, .lightbox-next { display: none; }
    .lightbox-close { top: -40px; font-size: 2rem; }
    #lightboxImage { max-height: 60vh; }
}
"#;

/// Reads one `.portfolio-item`. Items without an `<img>` are not part of the
/// gallery. Images still waiting for lazy loading are addressed by `data-src`.
pub fn read_item(item: &Element) -> SiteResult<Option<PortfolioImage>> {
    let Some(img) = item
        .query_selector("img")?
        .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
    else {
        return Ok(None);
    };
    let text_of = |selector: &str| -> SiteResult<String> {
        Ok(item
            .query_selector(selector)?
            .and_then(|element| element.text_content())
            .unwrap_or_default())
    };
    let src = Some(img.src())
        .filter(|src| !src.is_empty())
        .or_else(|| img.get_attribute("data-src"))
        .unwrap_or_default();
    Ok(Some(PortfolioImage {
        src,
        alt: img.alt(),
        title: text_of(".portfolio-info h3")?,
        description: text_of(".portfolio-info p")?,
    }))
}

/// Full-screen viewer over the portfolio thumbnails.
pub struct Lightbox {
    document: Document,
    gallery: RefCell<Gallery>,
    root: HtmlElement,
    image: HtmlImageElement,
    title: Element,
    description: Element,
}

impl Lightbox {
    /// Collects the gallery and wires thumbnails and keyboard. Returns `None`
    /// when the page has no portfolio items.
    pub fn init(document: &Document) -> SiteResult<Option<Rc<Self>>> {
        let mut thumbnails = Vec::new();
        let mut images = Vec::new();
        for item in dom::query_all::<HtmlElement>(document, ITEM_SELECTOR)? {
            if let Some(image) = read_item(&item)? {
                thumbnails.push(item);
                images.push(image);
            }
        }
        if images.is_empty() {
            log::debug!("No portfolio items, lightbox disabled");
            return Ok(None);
        }

        let lightbox = Rc::new(Self::mount(document, Gallery::new(images))?);

        for (index, item) in thumbnails.iter().enumerate() {
            dom::set_style(item, "cursor", "pointer")?;
            let lightbox = Rc::clone(&lightbox);
            dom::listen(item, "click", move |_| lightbox.open(index))?;
        }

        let keyboard = Rc::clone(&lightbox);
        dom::listen(document, "keydown", move |event: Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                keyboard.handle_key(&event.key());
            }
        })?;

        log::info!("Lightbox ready with {} images", thumbnails.len());
        Ok(Some(lightbox))
    }

    fn mount(document: &Document, gallery: Gallery) -> SiteResult<Self> {
        if document.get_element_by_id(STYLE_ID).is_none() {
            if let Some(head) = document.head() {
                let style: Element = dom::create(document, "style", "")?;
                style.set_id(STYLE_ID);
                style.set_text_content(Some(LIGHTBOX_CSS));
                head.append_child(&style)?;
            }
        }
        if document.get_element_by_id(ROOT_ID).is_none() {
            dom::body(document)?.insert_adjacent_html("beforeend", LIGHTBOX_HTML)?;
        }
        Ok(Self {
            document: document.clone(),
            gallery: RefCell::new(gallery),
            root: dom::by_id(document, ROOT_ID)?,
            image: dom::by_id(document, IMAGE_ID)?,
            title: dom::by_id(document, TITLE_ID)?,
            description: dom::by_id(document, DESCRIPTION_ID)?,
        })
    }

    pub fn len(&self) -> usize {
        self.gallery.borrow().len()
    }

    pub fn is_open(&self) -> bool {
        self.gallery.borrow().is_open()
    }

    pub fn current(&self) -> Option<PortfolioImage> {
        self.gallery.borrow().current().cloned()
    }

    pub fn open(&self, index: usize) {
        let image = self.gallery.borrow_mut().open(index).cloned();
        let Some(image) = image else {
            log::debug!("Lightbox index {} out of range", index);
            return;
        };
        self.render(&image);
        let result = dom::set_style(&self.root, "display", "flex")
            .and_then(|_| dom::lock_page_scroll(&self.document, true));
        dom::report("Open lightbox", result);
    }

    pub fn next(&self) {
        self.navigate(LightboxCommand::Next);
    }

    pub fn previous(&self) {
        self.navigate(LightboxCommand::Previous);
    }

    pub fn close(&self) {
        self.navigate(LightboxCommand::Close);
    }

    fn handle_key(&self, key: &str) {
        if !self.is_open() {
            return;
        }
        if let Some(command) = LightboxCommand::from_key(key) {
            self.navigate(command);
        }
    }

    fn navigate(&self, command: LightboxCommand) {
        let was_open = self.is_open();
        let image = self.gallery.borrow_mut().apply(command).cloned();
        match image {
            Some(image) => self.render(&image),
            None if command == LightboxCommand::Close && was_open => {
                let result = dom::set_style(&self.root, "display", "none")
                    .and_then(|_| dom::lock_page_scroll(&self.document, false));
                dom::report("Close lightbox", result);
            }
            None => {}
        }
    }

    fn render(&self, image: &PortfolioImage) {
        self.image.set_src(&image.src);
        self.image.set_alt(&image.alt);
        self.title.set_text_content(Some(&image.title));
        self.description.set_text_content(Some(&image.description));
    }
}
