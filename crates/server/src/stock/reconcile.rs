//! Draft reconciliation for medicine unit collections.
//!
//! While an invoice is being put together, each medicine line item owns a
//! collection of unit drafts whose length must track the line's `quantity`.
//! The reducers here reshape that collection without touching whatever the
//! user already filled in.

use uuid::Uuid;

use crate::models::medicine_unit::MedicineUnitDraft;

use super::custom_id::custom_unit_id;

/// Reshapes a draft collection to match a new quantity.
///
/// Growing appends freshly generated drafts after the existing ones; the
/// ordinal of each new draft continues from the current length. Shrinking
/// keeps the first `new_quantity` drafts and drops the rest, filled-in or
/// not. Existing drafts are carried over untouched, editing keys included.
///
/// A non-positive quantity is rejected before this is called, so zero
/// simply truncates to an empty collection.
#[must_use]
pub fn reconcile_unit_drafts(
    current: &[MedicineUnitDraft],
    new_quantity: usize,
    product_name: &str,
) -> Vec<MedicineUnitDraft> {
    if new_quantity <= current.len() {
        return current.iter().take(new_quantity).cloned().collect();
    }

    let mut drafts = current.to_vec();
    for ordinal in current.len() + 1..=new_quantity {
        drafts.push(MedicineUnitDraft {
            draft_key: Uuid::new_v4(),
            custom_id: custom_unit_id(product_name, ordinal),
            expiration_date: None,
            first_usage_date: None,
            good_for: None,
            usage_description: None,
        });
    }
    drafts
}

/// Regenerates every draft's custom ID after a product rename.
///
/// IDs are rewritten in place by position; expiration and usage data are
/// left alone.
pub fn relabel_unit_drafts(drafts: &mut [MedicineUnitDraft], product_name: &str) {
    for (index, draft) in drafts.iter_mut().enumerate() {
        draft.custom_id = custom_unit_id(product_name, index + 1);
    }
}
