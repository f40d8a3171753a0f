//! Collection (taxon) normalization.

use crate::sylius::rest::types::SyliusTaxon;
use crate::sylius::types::{Collection, Seo};

pub(crate) fn normalize_collection(taxon: SyliusTaxon) -> Collection {
    let title = taxon.name.unwrap_or_default();
    let handle = taxon.slug.or(taxon.code).unwrap_or_default();
    let description = taxon.description.unwrap_or_default();

    Collection {
        path: format!("/search/{handle}"),
        handle,
        title: title.clone(),
        description: description.clone(),
        seo: Seo {
            title: Some(title),
            description: (!description.is_empty()).then_some(description),
        },
        // Taxon payloads carry no modification timestamp.
        updated_at: None,
    }
}
