use super::card::{Card, CardIndex, FieldValues};

pub struct BranchResolver {}

impl BranchResolver {
    ///
    /// goes through all of card's rules in declared order.
    /// every rule that maps the current answer overwrites the result,
    /// so if several rules match - the last one wins
    pub fn resolve(card: &Card, values: &FieldValues) -> Option<CardIndex> {
        let mut result = None;
        for rule in card.branch_rules.iter() {
            if let Some(target) = rule.target_for(values) {
                result = Some(target);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::super::card::{BranchRule, FieldDecl};
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_rules() {
        let card = Card::form(1, vec![FieldDecl::new("opt", &["Yes", "No"])]);
        assert_eq!(None, BranchResolver::resolve(&card, &values(&[("opt", "Yes")])));
    }

    #[test]
    fn single_rule() {
        let card = Card::form(1, vec![FieldDecl::new("opt", &["Yes", "No"])])
            .with_rule(BranchRule::new("opt", &[("Yes", 3)]));
        assert_eq!(Some(3), BranchResolver::resolve(&card, &values(&[("opt", "Yes")])));
        assert_eq!(None, BranchResolver::resolve(&card, &values(&[("opt", "No")])));
        assert_eq!(None, BranchResolver::resolve(&card, &values(&[])));
    }

    #[test]
    fn last_match_wins() {
        let card = Card::form(
            1,
            vec![
                FieldDecl::new("first", &["Yes", "No"]),
                FieldDecl::new("second", &["Yes", "No"]),
            ],
        )
        .with_rule(BranchRule::new("first", &[("Yes", 4)]))
        .with_rule(BranchRule::new("second", &[("Yes", 6)]));

        let both = values(&[("first", "Yes"), ("second", "Yes")]);
        assert_eq!(Some(6), BranchResolver::resolve(&card, &both));

        // a later rule that does not match does not erase an earlier match
        let only_first = values(&[("first", "Yes"), ("second", "No")]);
        assert_eq!(Some(4), BranchResolver::resolve(&card, &only_first));
    }
}
