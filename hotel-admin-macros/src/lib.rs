//! Procedural macros for the hotel admin UI kit

use darling::{FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use std::collections::BTreeMap;
use syn::{parse_macro_input, DeriveInput};

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    data: darling::ast::Data<ActionVariant, ()>,

    /// Enable automatic category inference from variant name prefixes
    #[darling(default)]
    infer_categories: bool,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,

    /// Explicit category override
    #[darling(default)]
    category: Option<String>,

    /// Exclude from category inference
    #[darling(default)]
    skip_category: bool,
}

// Words that END the subject part of a variant name.
// Nouns such as "Field" or "Card" must not be listed here.
const ACTION_VERBS: &[&str] = &[
    // State transitions
    "Start", "End", "Open", "Close", "Submit", "Confirm", "Cancel", "Activate", "Sign",
    // Navigation
    "Next", "Prev", "Up", "Down", "Enter", "Exit", "Back",
    // Data
    "Add", "Remove", "Clear", "Change", "Update", "Set", "Load", "Save", "Reset",
    // Visibility and focus
    "Show", "Hide", "Toggle", "Focus", "Blur", "Select",
];

/// Split a PascalCase string into parts
fn split_pascal_case(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for ch in s.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Convert PascalCase to snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Infer category from a variant name
///
/// The category is the prefix before the first verb, so
/// `SettingsCheckInChange` -> `settings_check_in` and
/// `SessionSignOut` -> `session`. Names starting with a verb, names
/// without a verb and single-word names are uncategorized. `Did*` names are
/// async results.
fn infer_category(name: &str) -> Option<String> {
    let parts = split_pascal_case(name);
    let first = parts.first()?;

    if first == "Did" {
        return Some("async_result".to_string());
    }

    if parts.len() < 2 || ACTION_VERBS.contains(&first.as_str()) {
        return None;
    }

    let verb_at = parts
        .iter()
        .skip(1)
        .position(|part| ACTION_VERBS.contains(&part.as_str()))?
        + 1;

    Some(to_snake_case(&parts[..verb_at].concat()))
}

/// Derive macro for the Action trait
///
/// Generates a `name()` method that returns the variant name as a static string.
///
/// With `#[action(infer_categories)]`, also generates:
/// - `impl ActionCategory` with `category() -> Option<&'static str>`
/// - `is_{category}()` predicates for each category found
///
/// Variants accept `#[action(category = "...")]` to set a category
/// explicitly and `#[action(skip_category)]` to opt out.
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// #[action(infer_categories)]
/// enum DeskAction {
///     NavOpen(Section),
///     SettingsCheckInChange(String),
///     SessionSignOut,
///     Quit,  // uncategorized
/// }
///
/// let action = DeskAction::SessionSignOut;
/// assert_eq!(action.name(), "SessionSignOut");
/// assert_eq!(action.category(), Some("session"));
/// assert!(action.is_session());
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    // Braced patterns with `..` match unit, tuple and struct variants alike
    let name_arms = variants.iter().map(|v| {
        let variant_name = &v.ident;
        let variant_str = variant_name.to_string();
        quote! { #name::#variant_name { .. } => #variant_str }
    });

    let mut expanded = quote! {
        impl hotel_admin::Action for #name {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    };

    if opts.infer_categories {
        let mut categories: BTreeMap<String, Vec<&syn::Ident>> = BTreeMap::new();

        let category_arms: Vec<_> = variants
            .iter()
            .map(|v| {
                let cat = if v.skip_category {
                    None
                } else if let Some(explicit) = &v.category {
                    Some(explicit.clone())
                } else {
                    infer_category(&v.ident.to_string())
                };

                let variant = &v.ident;
                match cat {
                    Some(c) => {
                        categories.entry(c.clone()).or_default().push(variant);
                        quote! { #name::#variant { .. } => ::core::option::Option::Some(#c) }
                    }
                    None => quote! { #name::#variant { .. } => ::core::option::Option::None },
                }
            })
            .collect();

        let predicates = categories.iter().map(|(cat, members)| {
            let predicate_name = format_ident!("is_{}", cat);
            let doc = format!("Returns true if this action belongs to the `{cat}` category.");
            let patterns: Vec<_> = members
                .iter()
                .map(|variant| quote! { #name::#variant { .. } })
                .collect();
            quote! {
                #[doc = #doc]
                pub fn #predicate_name(&self) -> bool {
                    matches!(self, #(#patterns)|*)
                }
            }
        });

        expanded = quote! {
            #expanded

            impl #name {
                /// Get the action's category (if categorized)
                pub fn category(&self) -> ::core::option::Option<&'static str> {
                    match self {
                        #(#category_arms,)*
                    }
                }

                #(#predicates)*
            }

            impl hotel_admin::ActionCategory for #name {
                fn category(&self) -> ::core::option::Option<&'static str> {
                    #name::category(self)
                }
            }
        };
    }

    expanded.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pascal_case() {
        assert_eq!(
            split_pascal_case("SettingsCheckInChange"),
            vec!["Settings", "Check", "In", "Change"]
        );
    }

    #[test]
    fn test_infer_category() {
        assert_eq!(
            infer_category("SettingsCheckInChange").as_deref(),
            Some("settings_check_in")
        );
        assert_eq!(infer_category("SessionSignOut").as_deref(), Some("session"));
        assert_eq!(infer_category("NavOpen").as_deref(), Some("nav"));
        assert_eq!(infer_category("DidLoadRooms").as_deref(), Some("async_result"));
    }

    #[test]
    fn test_uncategorized_names() {
        assert_eq!(infer_category("Quit"), None);
        assert_eq!(infer_category("FocusNext"), None);
        assert_eq!(infer_category("RoomInventory"), None);
    }
}
