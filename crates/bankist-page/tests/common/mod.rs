//! Shared fixture: the Bankist landing page with a fixed layout
//!
//! Layout (document rows, 1280px wide):
//! - header 0..800, nav bar 0..90
//! - section 1 (features, lazy images) 850..1850
//! - section 2 (operations tabs) 1900..2900
//! - section 3 (testimonial slider) 2950..3950
//! - sign-up section 4000..4600

#![allow(dead_code)]

use bankist_dom::{DOMRect, Document, NodeId};
use bankist_page::{Page, PageConfig, Viewport};

pub const BANKIST_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <title>Bankist | When Banking meets Minimalist</title>
  </head>
  <body>
    <header class="header">
      <nav class="nav">
        <img src="img/logo.png" alt="Bankist logo" class="nav__logo" id="logo" />
        <ul class="nav__links">
          <li class="nav__item"><a class="nav__link" href="#section--1">Features</a></li>
          <li class="nav__item"><a class="nav__link" href="#section--2">Operations</a></li>
          <li class="nav__item"><a class="nav__link" href="#section--3">Testimonials</a></li>
          <li class="nav__item"><a class="nav__link nav__link--btn btn--show-modal" href="#">Open account</a></li>
        </ul>
      </nav>
      <div class="header__title">
        <h1>When <span class="highlight">banking</span> meets <span class="highlight">minimalist</span></h1>
        <button class="btn--text btn--scroll-to">Learn more &DownArrow;</button>
      </div>
    </header>

    <section class="section" id="section--1">
      <div class="features">
        <img src="img/digital-lazy.jpg" data-src="img/digital.jpg" alt="Computer" class="features__img lazy-img" />
        <img src="img/grow-lazy.jpg" data-src="img/grow.jpg" alt="Plant" class="features__img lazy-img" />
        <img src="img/card-lazy.jpg" data-src="img/card.jpg" alt="Credit card" class="features__img lazy-img" />
      </div>
    </section>

    <section class="section" id="section--2">
      <div class="operations">
        <div class="operations__tab-container">
          <button class="btn operations__tab operations__tab--1 operations__tab--active" data-tab="1">
            <span>01</span>Instant Transfers
          </button>
          <button class="btn operations__tab operations__tab--2" data-tab="2">
            <span>02</span>Instant Loans
          </button>
          <button class="btn operations__tab operations__tab--3" data-tab="3">
            <span>03</span>Instant Closing
          </button>
        </div>
        <div class="operations__content operations__content--1 operations__content--active">
          <h5 class="operations__header">Transfer money to anyone, instantly!</h5>
        </div>
        <div class="operations__content operations__content--2">
          <h5 class="operations__header">Buy a home or make your dreams come true!</h5>
        </div>
        <div class="operations__content operations__content--3">
          <h5 class="operations__header">No longer need your account? No problem!</h5>
        </div>
      </div>
    </section>

    <section class="section" id="section--3">
      <div class="slider">
        <div class="slide slide--1"><h5 class="testimonial__header">Best financial decision ever!</h5></div>
        <div class="slide slide--2"><h5 class="testimonial__header">The last step to becoming a complete minimalist</h5></div>
        <div class="slide slide--3"><h5 class="testimonial__header">Finally free from old-school banks</h5></div>
        <button class="slider__btn slider__btn--left">&larr;</button>
        <button class="slider__btn slider__btn--right">&rarr;</button>
        <div class="dots"></div>
      </div>
    </section>

    <section class="section section--sign-up">
      <button class="btn btn--show-modal">Open your free account today!</button>
    </section>

    <div class="modal hidden">
      <button class="btn--close-modal">&times;</button>
      <h2 class="modal__header">Open your bank account <br /> in just <span class="highlight">5 minutes</span></h2>
      <form class="modal__form">
        <label>First Name</label>
        <input type="text" />
        <button class="btn">Next step &rarr;</button>
      </form>
    </div>
    <div class="overlay hidden"></div>
  </body>
</html>
"##;

pub const WIDTH: f64 = 1280.0;
pub const HEIGHT: f64 = 800.0;

/// Install a test subscriber once; `RUST_LOG` picks the level
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn find(document: &Document, selector: &str) -> NodeId {
    document
        .query_selector(NodeId::ROOT, selector)
        .unwrap()
        .unwrap_or_else(|| panic!("fixture has no {selector}"))
}

pub fn find_all(document: &Document, selector: &str) -> Vec<NodeId> {
    document.query_selector_all(NodeId::ROOT, selector).unwrap()
}

/// Parsed fixture with layout boxes assigned
pub fn laid_out_document() -> Document {
    let mut doc = bankist_html::parse(BANKIST_HTML).unwrap();

    let boxes = [
        (".header", 0.0, 800.0),
        (".nav", 0.0, 90.0),
        ("#section--1", 850.0, 1000.0),
        ("#section--2", 1900.0, 1000.0),
        ("#section--3", 2950.0, 1000.0),
        (".section--sign-up", 4000.0, 600.0),
    ];
    for (selector, top, height) in boxes {
        let node = find(&doc, selector);
        doc.set_layout_rect(node, DOMRect::from_xywh(0.0, top, WIDTH, height)).unwrap();
    }

    for (i, image) in find_all(&doc, "img[data-src]").into_iter().enumerate() {
        let top = 1100.0 + 300.0 * i as f64;
        doc.set_layout_rect(image, DOMRect::from_xywh(100.0, top, 500.0, 250.0)).unwrap();
    }
    doc
}

pub fn page() -> Page {
    page_with(PageConfig::default())
}

pub fn page_with(config: PageConfig) -> Page {
    init_tracing();
    Page::attach(laid_out_document(), Viewport::new(WIDTH, HEIGHT), config).unwrap()
}

pub fn has_class(page: &Page, node: NodeId, class: &str) -> bool {
    page.document().has_class(node, class)
}

pub fn style(page: &Page, node: NodeId, property: &str) -> Option<String> {
    page.document()
        .element(node)
        .unwrap()
        .style()
        .get_property_value(property)
        .map(str::to_string)
}
