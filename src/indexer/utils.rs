use std::{borrow::Borrow, cmp::Ordering};

use icu_collator::{Collator, CollatorOptions};
use icu_provider::DataLocale;

use crate::{error::IndexError, metadata::NoteRecord};

/// Root-locale collator at default (tertiary) strength, punctuation not ignored.
pub(super) fn title_collator() -> Result<Collator, IndexError> {
    Collator::try_new(&DataLocale::default(), CollatorOptions::new()).map_err(|e| {
        IndexError::Collator {
            reason: e.to_string(),
        }
    })
}

/// Newest first. Notes sharing a date are ordered by title.
pub(super) fn sort_note<T: Borrow<NoteRecord>>(collator: &Collator, a: &T, b: &T) -> Ordering {
    let (a, b) = (a.borrow(), b.borrow());
    b.date
        .cmp(&a.date)
        .then_with(|| collator.compare(&a.title, &b.title))
}
