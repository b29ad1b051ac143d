//! Weet entity <-> model mappers

use weet_core::entities::{Weet, WeetChecks, WeetDetail, WeetStats};

use crate::models::{WeetDetailModel, WeetModel};

impl From<WeetModel> for Weet {
    fn from(model: WeetModel) -> Self {
        Weet {
            id: model.id,
            body: model.body,
            author: model.author,
            created_at: model.created_at,
        }
    }
}

impl From<WeetDetailModel> for WeetDetail {
    fn from(model: WeetDetailModel) -> Self {
        WeetDetail {
            weet: Weet {
                id: model.id,
                body: model.body,
                author: model.author,
                created_at: model.created_at,
            },
            author_username: model.author_username,
            author_image: model.author_image,
            stats: WeetStats::new(model.reweet_count, model.favorite_count, model.tab_count),
            checks: WeetChecks::new(model.reweeted, model.favorited, model.tabbed),
        }
    }
}
