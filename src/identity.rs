//! Identity assignment and default filling for ads persisted to the local
//! cache. The remote collection applies its own schema defaults, so none of
//! this runs when a draft is persisted remotely.

use crate::models::{Ad, AdDraft, AdId, Seller, PLACEHOLDER_IMAGE};
use chrono::{DateTime, Datelike, Utc};

/// Text shown for recency on a freshly created ad. Never recomputed from
/// `created_at`.
pub const POSTED_JUST_NOW: &str = "Just now";

/// Next local id: one past the current maximum local id in the collection.
///
/// Derived from content rather than a separate counter, so deleting the
/// max-id record and re-creating can reuse an id. Acceptable because the
/// local cache is a single-writer fallback tier.
pub fn next_local_id(ads: &[Ad]) -> u64 {
    ads.iter()
        .filter_map(|ad| match ad.id {
            AdId::Local(n) => Some(n),
            AdId::Remote(_) => None,
        })
        .max()
        .unwrap_or(0)
        + 1
}

/// Turn a draft into a complete local ad record: assign the given local id
/// and fill every optional field with its documented default.
pub fn normalize(draft: AdDraft, id: u64, now: DateTime<Utc>) -> Ad {
    let images = match draft.images {
        Some(imgs) if !imgs.is_empty() => imgs,
        _ => vec![PLACEHOLDER_IMAGE.to_string()],
    };

    Ad {
        id: AdId::Local(id),
        title: draft.title,
        price: draft.price,
        category: draft.category,
        condition: draft.condition.unwrap_or_default(),
        description: draft.description,
        location: draft.location,
        posted: POSTED_JUST_NOW.to_string(),
        images,
        seller: Seller {
            name: draft.name.unwrap_or_else(|| "Anonymous".to_string()),
            member_since: now.year().to_string(),
            phone: draft.phone.unwrap_or_default(),
            user_id: None,
        },
        created_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Condition;

    fn draft() -> AdDraft {
        AdDraft {
            title: "Mountain bike".to_string(),
            price: 150.0,
            category: "sports".to_string(),
            condition: None,
            description: "26 inch wheels, recently serviced".to_string(),
            location: "Islamabad".to_string(),
            images: None,
            name: None,
            phone: None,
        }
    }

    fn local_ad(id: u64) -> Ad {
        normalize(draft(), id, Utc::now())
    }

    #[test]
    fn next_id_is_one_past_current_max() {
        let ads = vec![local_ad(3), local_ad(7), local_ad(5)];
        assert_eq!(next_local_id(&ads), 8);
    }

    #[test]
    fn next_id_on_empty_collection_is_one() {
        assert_eq!(next_local_id(&[]), 1);
    }

    #[test]
    fn remote_ids_do_not_participate_in_numbering() {
        let mut ads = vec![local_ad(2)];
        ads[0].id = AdId::Remote("68ab34cd9f1e".to_string());
        assert_eq!(next_local_id(&ads), 1);
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let now = Utc::now();
        let ad = normalize(draft(), 1, now);

        assert_eq!(ad.id, AdId::Local(1));
        assert_eq!(ad.condition, Condition::Used);
        assert_eq!(ad.images, vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(ad.seller.name, "Anonymous");
        assert_eq!(ad.seller.member_since, now.year().to_string());
        assert_eq!(ad.seller.phone, "");
        assert_eq!(ad.posted, POSTED_JUST_NOW);
        assert_eq!(ad.created_at, now);
    }

    #[test]
    fn provided_fields_are_kept() {
        let mut d = draft();
        d.condition = Some(Condition::LikeNew);
        d.images = Some(vec!["data:image/png;base64,AAAA".to_string()]);
        d.name = Some("Bilal".to_string());
        d.phone = Some("0300-1234567".to_string());

        let ad = normalize(d, 4, Utc::now());
        assert_eq!(ad.condition, Condition::LikeNew);
        assert_eq!(ad.images.len(), 1);
        assert_eq!(ad.seller.name, "Bilal");
        assert_eq!(ad.seller.phone, "0300-1234567");
    }

    #[test]
    fn empty_images_list_gets_the_placeholder() {
        let mut d = draft();
        d.images = Some(vec![]);
        let ad = normalize(d, 1, Utc::now());
        assert_eq!(ad.images, vec![PLACEHOLDER_IMAGE.to_string()]);
    }
}
