//! Pets page.

use leptos::prelude::*;
use menagerie_client::{query_list, RowView};
use menagerie_common::{AllPets, Pet};

/// Lists every pet and its owner from the pets endpoint.
#[component]
pub fn PetsPage() -> impl IntoView {
    query_list::<AllPets>("Pets", pet_row)
}

fn pet_row(pet: &Pet) -> RowView {
    // Ownerless pets still get the label, with nothing after it.
    let owner = pet
        .owner
        .as_ref()
        .map(|owner| format!("{} {}", owner.first_name, owner.last_name))
        .unwrap_or_default();

    RowView::new(&pet.name)
        .line(format!("Species: {}", pet.species))
        .line(format!("Breed {}", pet.breed))
        .line(format!("Owner: {owner}"))
}
