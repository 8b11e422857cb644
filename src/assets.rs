//! Asset resolution for image values.
//!
//! The serializer knows nothing about asset storage. Callers resolve the assets
//! a document uses into an [AssetMap] up front and pass the closure returned by
//! [resolve_assets] as the transform hook.

use crate::values::image::ImageValue;
use crate::values::StyleValue;
use std::collections::HashMap;

/// A stored asset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Asset {
  /// The path of the asset, relative to the asset base url.
  pub path: String,
}

/// Assets by id.
pub type AssetMap = HashMap<String, Asset>;

/// Parses an asset map from JSON, e.g. `{"1234": {"path": "foo.png"}}`.
#[cfg(feature = "serde")]
pub fn parse_assets(json: &str) -> Result<AssetMap, crate::error::Error<crate::error::ValueError>> {
  serde_json::from_str(json)
    .map_err(|err| crate::error::Error::from_json(err, crate::error::ValueError::InvalidAssets))
}

/// Returns a transform hook that replaces asset images with url images,
/// prefixing asset paths with `base_url`. Missing assets become `none`.
pub fn resolve_assets<'a>(
  assets: &'a AssetMap,
  base_url: &'a str,
) -> impl Fn(&StyleValue) -> Option<StyleValue> + 'a {
  move |value| match value {
    StyleValue::Image {
      value: ImageValue::Asset { value: id },
    } => match assets.get(id) {
      Some(asset) => Some(StyleValue::image_url(format!("{}{}", base_url, asset.path))),
      None => {
        log::debug!("asset {:?} not found, using none", id);
        Some(StyleValue::keyword("none"))
      }
    },
    _ => None,
  }
}
