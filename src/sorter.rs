use crate::types::{DomainSet, OutputList, SortPolicy};

/// Stage the set into a list and order it under `policy`.
pub fn sort(domains: DomainSet, policy: SortPolicy) -> OutputList {
    let mut list: OutputList = domains.into_iter().collect();
    match policy {
        SortPolicy::Lexicographic => list.sort_unstable(),
        SortPolicy::ParentGrouped => {
            list.sort_unstable_by(|a, b| a.parent().cmp(b.parent()).then_with(|| a.cmp(b)))
        }
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Domain;

    fn set(domains: &[&str]) -> DomainSet {
        domains.iter().map(|s| Domain::parse(s).unwrap()).collect()
    }

    fn names(list: &OutputList) -> Vec<&str> {
        list.iter().map(|d| d.as_str()).collect()
    }

    #[test]
    fn test_lexicographic() {
        let list = sort(
            set(&["zeta.org", "b.example.com", "alpha.net", "a.example.com"]),
            SortPolicy::Lexicographic,
        );
        assert_eq!(
            names(&list),
            vec!["a.example.com", "alpha.net", "b.example.com", "zeta.org"]
        );
    }

    #[test]
    fn test_parent_grouped() {
        let list = sort(
            set(&["zeta.org", "b.example.com", "alpha.net", "example.com", "a.zeta.org"]),
            SortPolicy::ParentGrouped,
        );
        assert_eq!(
            names(&list),
            vec!["alpha.net", "b.example.com", "example.com", "a.zeta.org", "zeta.org"]
        );
    }

    #[test]
    fn test_sort_is_deterministic() {
        let domains = set(&["c.com", "a.com", "b.com", "a.b.com"]);
        let first = sort(domains.clone(), SortPolicy::Lexicographic);
        let second = sort(domains, SortPolicy::Lexicographic);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty() {
        assert!(sort(DomainSet::new(), SortPolicy::ParentGrouped).is_empty());
    }
}
