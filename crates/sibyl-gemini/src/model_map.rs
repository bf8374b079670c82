use std::borrow::Cow;

use sibyl_core::model::{GeminiModel, Model};

pub const GEMINI_25_PRO: &str = "gemini-2.5-pro";
pub const GEMINI_25_FLASH: &str = "gemini-2.5-flash";
pub const GEMINI_25_FLASH_LITE: &str = "gemini-2.5-flash-lite";
pub const GEMINI_20_FLASH: &str = "gemini-2.0-flash";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    if let Model::Custom(custom) = model {
        return Some((*custom).into());
    }

    let Model::Gemini(gemini_model) = model else {
        return None;
    };

    match gemini_model {
        GeminiModel::Gemini25Pro => Some(GEMINI_25_PRO.into()),
        GeminiModel::Gemini25Flash => Some(GEMINI_25_FLASH.into()),
        GeminiModel::Gemini25FlashLite => Some(GEMINI_25_FLASH_LITE.into()),
        GeminiModel::Gemini20Flash => Some(GEMINI_20_FLASH.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_models_map_to_their_api_names() {
        let name = map_model(&Model::Gemini(GeminiModel::Gemini25Flash)).unwrap();
        assert_eq!(name, GEMINI_25_FLASH);
    }

    #[test]
    fn custom_models_pass_through_verbatim() {
        let name = map_model(&Model::Custom("gemini-2.5-flash-preview")).unwrap();
        assert_eq!(name, "gemini-2.5-flash-preview");
    }
}
