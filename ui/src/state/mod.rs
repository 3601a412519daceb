//! Catalog List Reconciliation
//!
//! Pure list operations applied to the dashboard's `foods` signal after the
//! catalog service responds. Each takes the current list and returns a new
//! one, so event handlers always swap in a complete, well-defined sequence
//! instead of splicing in place.

use plateful_shared::Food;

/// Append a service-created entry to the end of the list.
///
/// Only called with the object the service returned, never with a locally
/// guessed one.
pub fn append_created(foods: &[Food], created: Food) -> Vec<Food> {
    let mut next = foods.to_vec();
    next.push(created);
    next
}

/// Replace an edited entry with the service's returned representation.
///
/// The first entry sharing the updated id is removed and the returned
/// object is appended, so an edited entry moves to the end of the list.
pub fn replace_updated(foods: &[Food], updated: Food) -> Vec<Food> {
    let mut next = foods.to_vec();
    if let Some(index) = next.iter().position(|f| f.id == updated.id) {
        next.remove(index);
    }
    next.push(updated);
    next
}

/// Remove the entry with the given id, if present.
pub fn remove_by_id(foods: &[Food], id: u64) -> Vec<Food> {
    foods.iter().filter(|f| f.id != id).cloned().collect()
}

/// List after a delete intent.
///
/// The entry being edited, if any, is removed immediately; without an
/// edited entry the list stays untouched.
pub fn remove_editing(foods: &[Food], editing: Option<&Food>) -> Vec<Food> {
    match editing {
        Some(editing) => remove_by_id(foods, editing.id),
        None => foods.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: u64, name: &str) -> Food {
        Food {
            id,
            name: name.to_string(),
            image: format!("https://example.com/{id}.png"),
            price: "19.90".to_string(),
            description: "Macarrao ao molho branco com funghi.".to_string(),
            available: true,
        }
    }

    #[test]
    fn create_grows_list_by_exactly_the_returned_entry() {
        let foods = vec![food(1, "Ao molho"), food(2, "Veggie")];
        let created = food(3, "A la Camarón");

        let next = append_created(&foods, created.clone());

        assert_eq!(next.len(), 3);
        assert_eq!(next.last(), Some(&created));
        // Existing entries keep their order.
        assert_eq!(next[0].id, 1);
        assert_eq!(next[1].id, 2);
    }

    #[test]
    fn update_leaves_no_duplicate_ids_and_moves_entry_last() {
        let foods = vec![food(1, "Ao molho"), food(2, "Veggie"), food(3, "A la Camarón")];
        let updated = food(2, "Veggie Especial");

        let next = replace_updated(&foods, updated.clone());

        assert_eq!(next.len(), 3);
        assert_eq!(next.iter().filter(|f| f.id == 2).count(), 1);
        assert_eq!(next.last(), Some(&updated));
    }

    #[test]
    fn update_of_unknown_id_still_appends_the_returned_entry() {
        let foods = vec![food(1, "Ao molho")];
        let updated = food(9, "Novo");

        let next = replace_updated(&foods, updated.clone());

        assert_eq!(next.len(), 2);
        assert_eq!(next.last(), Some(&updated));
    }

    #[test]
    fn remove_drops_only_the_matching_entry() {
        let foods = vec![food(1, "Ao molho"), food(2, "Veggie")];

        let next = remove_by_id(&foods, 2);

        assert_eq!(next, vec![food(1, "Ao molho")]);
        // Unknown ids leave the list untouched.
        assert_eq!(remove_by_id(&next, 99), next);
    }

    #[test]
    fn delete_intent_removes_the_edited_entry() {
        let foods = vec![food(1, "Ao molho"), food(2, "Veggie")];
        let editing = food(2, "Veggie");

        let next = remove_editing(&foods, Some(&editing));

        assert_eq!(next, vec![food(1, "Ao molho")]);
    }

    #[test]
    fn delete_intent_without_edited_entry_leaves_list_untouched() {
        let foods = vec![food(1, "Ao molho"), food(2, "Veggie")];

        assert_eq!(remove_editing(&foods, None), foods);
    }

    // Full dashboard scenario: load two entries, create a third, edit the
    // second, then delete it while it is the entry being edited.
    #[test]
    fn load_create_edit_delete_scenario() {
        let foods = vec![food(1, "Ao molho"), food(2, "Veggie")];

        let foods = append_created(&foods, food(3, "X"));
        assert_eq!(foods.len(), 3);
        assert_eq!(foods.last().map(|f| f.id), Some(3));

        let foods = replace_updated(&foods, food(2, "Y"));
        assert_eq!(foods.len(), 3);
        assert_eq!(foods.last().map(|f| (f.id, f.name.clone())), Some((2, "Y".to_string())));

        let editing = food(2, "Y");
        let foods = remove_editing(&foods, Some(&editing));
        assert_eq!(foods.len(), 2);
        assert!(foods.iter().all(|f| f.id != 2));
    }
}
