//! Shopping drill session state

use crate::shopping::dialogue::{script, MAX_QUANTITY};
use crate::shopping::{DialogueLine, Product, CATALOG};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShoppingIntent {
    /// Pick a product by its catalog index
    Select(usize),
    /// Cycle the quantity 1..=5; only on the shelf
    NextQuantity,
    /// Advance the dialogue; after the last line return to the shelf
    Next,
    ChooseDifferent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShoppingState {
    /// Catalog index of the chosen product
    pub selected: Option<usize>,
    pub quantity: u32,
    pub step: usize,
    pub dialogues_completed: u32,
}

impl ShoppingState {
    pub fn new() -> Self {
        ShoppingState {
            selected: None,
            quantity: 1,
            step: 0,
            dialogues_completed: 0,
        }
    }

    pub fn product(&self) -> Option<&'static Product> {
        self.selected.and_then(|index| CATALOG.get(index))
    }

    /// Script for the current product and quantity
    pub fn lines(&self) -> Vec<DialogueLine> {
        self.product()
            .map(|product| script(product, self.quantity))
            .unwrap_or_default()
    }

    /// Line currently on stage
    pub fn current_line(&self) -> Option<DialogueLine> {
        self.lines().into_iter().nth(self.step)
    }

    pub fn is_last_line(&self) -> bool {
        self.step + 1 >= self.lines().len()
    }

    pub fn apply(self, intent: ShoppingIntent) -> Self {
        match intent {
            ShoppingIntent::Select(index) if index < CATALOG.len() => ShoppingState {
                selected: Some(index),
                step: 0,
                ..self
            },
            ShoppingIntent::Select(_) => self,
            // the script is already on stage; its quantity is fixed
            ShoppingIntent::NextQuantity if self.selected.is_some() => self,
            ShoppingIntent::NextQuantity => ShoppingState {
                quantity: self.quantity % MAX_QUANTITY + 1,
                ..self
            },
            ShoppingIntent::Next => {
                if self.selected.is_none() {
                    self
                } else if self.is_last_line() {
                    ShoppingState {
                        selected: None,
                        step: 0,
                        dialogues_completed: self.dialogues_completed + 1,
                        ..self
                    }
                } else {
                    ShoppingState {
                        step: self.step + 1,
                        ..self
                    }
                }
            }
            ShoppingIntent::ChooseDifferent => ShoppingState {
                selected: None,
                step: 0,
                ..self
            },
        }
    }
}

impl Default for ShoppingState {
    fn default() -> Self {
        Self::new()
    }
}
