use super::ProductEvent;
use crate::model::Product;
use widget_framework::{AttributeError, Component, Emitter, Html};

/// Compact summary of one product inside a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListItem {
    product: Product,
}

impl ProductListItem {
    pub fn new(product: Product) -> Self {
        Self { product }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Primary interaction. Emits a copy of the product so the receiver never
    /// shares state with the item.
    pub fn click(&self, emitter: &Emitter<ProductEvent>) -> bool {
        emitter.emit(Self::TAG, ProductEvent::Selected(self.product.clone()))
    }
}

impl Component for ProductListItem {
    const TAG: &'static str = "spc-product-list-item";

    fn observed_attributes() -> &'static [&'static str] {
        &["product"]
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> Result<(), AttributeError> {
        match name {
            "product" => {
                let raw = value.ok_or_else(|| AttributeError::invalid("product", "required"))?;
                self.product = serde_json::from_str(raw)
                    .map_err(|e| AttributeError::invalid("product", e.to_string()))?;
                Ok(())
            }
            _ => Err(AttributeError::Unobserved {
                tag: Self::TAG,
                name: name.to_string(),
            }),
        }
    }

    fn render(&self) -> Html {
        let mut html = Html::raw(r#"<li style="cursor: pointer">"#);
        html.push_raw("<label>Name:</label> <span>")
            .push_text(&self.product.name)
            .push_raw("</span> &nbsp; <label>Price:</label> <span>")
            .push_text(&self.product.price.to_string())
            .push_raw("</span></li>");
        html
    }
}
