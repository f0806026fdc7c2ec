use super::ProductEvent;
use crate::model::Product;
use widget_framework::{AttributeError, Component, Emitter, Html};

const NO_DESCRIPTION: &str = "No description available";

/// Full view of one product with a close control.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductItemDetail {
    product: Product,
}

impl ProductItemDetail {
    pub fn new(product: Product) -> Self {
        Self { product }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn close(&self, emitter: &Emitter<ProductEvent>) -> bool {
        emitter.emit(Self::TAG, ProductEvent::Unselected)
    }
}

impl Component for ProductItemDetail {
    const TAG: &'static str = "spc-product-item-detail";

    fn observed_attributes() -> &'static [&'static str] {
        &["product"]
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> Result<(), AttributeError> {
        if name != "product" {
            return Err(AttributeError::Unobserved {
                tag: Self::TAG,
                name: name.to_string(),
            });
        }
        let raw = value.ok_or_else(|| AttributeError::invalid("product", "required"))?;
        self.product =
            serde_json::from_str(raw).map_err(|e| AttributeError::invalid("product", e.to_string()))?;
        Ok(())
    }

    fn render(&self) -> Html {
        let description = match self.product.description.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => NO_DESCRIPTION,
        };
        let mut html = Html::raw("<h1>");
        html.push_text(&self.product.name)
            .push_raw("</h1><label>Price: <small>")
            .push_text(&self.product.price.to_string())
            .push_raw("</small></label><p>")
            .push_text(description)
            .push_raw("</p><button>Close</button>");
        html
    }
}
