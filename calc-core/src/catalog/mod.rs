//! The static calculator catalog.
//!
//! Ten categories and the calculators filed under them, in display order.
//! Everything here is `'static` data; lookups never allocate.

mod calculators;
mod categories;

use calculators::CALCULATORS;
use categories::CATEGORIES;

use crate::models::{CalculatorDefinition, Category, CategoryId};

/// Every category, financial first and conversions last.
pub fn list_categories() -> &'static [Category] {
    &CATEGORIES
}

/// Every calculator, grouped by category in [`list_categories`] order.
pub fn list_calculators() -> &'static [CalculatorDefinition] {
    CALCULATORS
}

/// Looks up a calculator by exact id.
///
/// # Examples
///
/// ```
/// use calc_core::catalog::find_calculator;
///
/// let tip = find_calculator("tip").unwrap();
/// assert_eq!(tip.name, "Tip Calculator");
/// assert!(find_calculator("Tip").is_none());
/// ```
pub fn find_calculator(id: &str) -> Option<&'static CalculatorDefinition> {
    CALCULATORS.iter().find(|c| c.id == id)
}

/// Looks up a category by its lowercase id (`"financial"`).
pub fn find_category(id: &str) -> Option<&'static Category> {
    CategoryId::parse(id).map(category)
}

/// The category record for `id`.
pub fn category(id: CategoryId) -> &'static Category {
    &CATEGORIES[id as usize]
}

/// Calculators filed under `category`, in display order.
pub fn calculators_in(category: CategoryId) -> impl Iterator<Item = &'static CalculatorDefinition> {
    CALCULATORS.iter().filter(move |c| c.category_id == category)
}

/// Calculators highlighted on the home page.
pub fn popular() -> impl Iterator<Item = &'static CalculatorDefinition> {
    CALCULATORS.iter().filter(|c| c.popular)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::InputKind;

    // =========================================================================
    // Category tests
    // =========================================================================

    #[test]
    fn ten_categories_in_fixed_order() {
        let ids: Vec<CategoryId> = list_categories().iter().map(|c| c.id).collect();

        assert_eq!(ids, CategoryId::ALL.to_vec());
    }

    #[test]
    fn category_indexes_by_id() {
        for id in CategoryId::ALL {
            assert_eq!(category(id).id, id);
        }
    }

    #[test]
    fn find_category_by_string_id() {
        let health = find_category("health").unwrap();

        assert_eq!(health.name, "Health");
        assert_eq!(health.icon_name, "Heart");
        assert!(find_category("Health").is_none());
    }

    // =========================================================================
    // Calculator tests
    // =========================================================================

    #[test]
    fn catalog_holds_128_calculators() {
        assert_eq!(list_calculators().len(), 128);
    }

    #[test]
    fn per_category_counts() {
        let counts: Vec<usize> = CategoryId::ALL
            .iter()
            .map(|id| calculators_in(*id).count())
            .collect();

        assert_eq!(counts, vec![15, 15, 20, 12, 10, 12, 10, 10, 12, 12]);
    }

    #[test]
    fn calculators_are_grouped_in_category_order() {
        let order: Vec<CategoryId> = list_calculators().iter().map(|c| c.category_id).collect();

        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }

    #[test]
    fn calculator_ids_are_unique() {
        let mut seen = HashSet::new();

        for calculator in list_calculators() {
            assert!(seen.insert(calculator.id), "duplicate id {}", calculator.id);
        }
    }

    #[test]
    fn field_names_are_unique_within_a_calculator() {
        for calculator in list_calculators() {
            let mut seen = HashSet::new();
            for field in calculator.inputs {
                assert!(
                    seen.insert(field.name),
                    "{} declares {} twice",
                    calculator.id,
                    field.name
                );
            }
        }
    }

    #[test]
    fn every_calculator_has_inputs() {
        for calculator in list_calculators() {
            assert!(!calculator.inputs.is_empty(), "{} has no inputs", calculator.id);
        }
    }

    #[test]
    fn select_fields_have_options_and_others_do_not() {
        for calculator in list_calculators() {
            for field in calculator.inputs {
                let is_select = field.kind == InputKind::Select;
                assert_eq!(
                    !field.options.is_empty(),
                    is_select,
                    "{}.{}",
                    calculator.id,
                    field.name
                );
            }
        }
    }

    #[test]
    fn popular_calculators() {
        let ids: Vec<&str> = popular().map(|c| c.id).collect();

        assert_eq!(
            ids,
            vec!["auto-loan", "mortgage", "compound-interest", "bmi", "percentage", "concrete"]
        );
    }

    #[test]
    fn find_calculator_is_exact() {
        assert_eq!(find_calculator("bmi").map(|c| c.category_id), Some(CategoryId::Health));
        assert!(find_calculator("BMI").is_none());
        assert!(find_calculator("").is_none());
    }

    #[test]
    fn prefilled_defaults_match_form_state() {
        let auto_loan = find_calculator("auto-loan").unwrap();

        let defaults = auto_loan.default_inputs();

        assert_eq!(defaults.len(), 8);
        assert_eq!(defaults.get("rate"), Some("5.5"));

        let loan = find_calculator("loan").unwrap();
        assert!(loan.default_inputs().is_empty());
    }
}
