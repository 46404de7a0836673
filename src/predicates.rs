//! The three role checks every rule is built from. None of them can fail:
//! an id that doesn't parse, or one that isn't there, just doesn't match.

use id::AsId;
use identity::Identity;
use resolver::Delegate;

/// Which of a delegate record's links to compare against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relation {
    School,
    Assignment
}

impl Relation {
    pub fn of(self, record: &Delegate) -> Option<i64> {
        match self {
            Relation::School => record.school_id,
            Relation::Assignment => record.assignment.as_ref().map(|a| a.id)
        }
    }
}

fn same(mine: Option<i64>, theirs: Option<i64>) -> bool {
    match (mine, theirs) {
        (Some(a), Some(b)) => a == b,
        _ => false
    }
}

pub fn is_advisor_of<I: AsId + ?Sized>(ctx: &Identity, school: &I) -> bool {
    ctx.authenticated && ctx.advisor && same(ctx.school_id, school.as_id())
}

pub fn is_chair_of<I: AsId + ?Sized>(ctx: &Identity, committee: &I) -> bool {
    ctx.authenticated && ctx.chair && same(ctx.committee_id, committee.as_id())
}

/// Without a relation, the target is the requester's own delegate id. With
/// one, the target is compared to that link on `record`, the requester's own
/// delegate record.
pub fn is_delegate_of<I: AsId + ?Sized>(
    ctx: &Identity,
    target: &I,
    relation: Option<Relation>,
    record: Option<&Delegate>
) -> bool {
    if !ctx.authenticated || !ctx.delegate {
        return false;
    }

    let mine = match relation {
        Some(relation) => record.and_then(|record| relation.of(record)),
        None => ctx.delegate_id
    };

    same(mine, target.as_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolver::AssignmentLink;

    fn record() -> Delegate {
        Delegate {
            id: 9,
            school_id: Some(5),
            assignment: Some(AssignmentLink { id: 42, committee_id: 3 })
        }
    }

    #[test]
    fn advisor_matches_own_school() {
        let ctx = Identity::advisor(1, 5);
        assert!(is_advisor_of(&ctx, &5i64));
        assert!(is_advisor_of(&ctx, "5"));
        assert!(!is_advisor_of(&ctx, &6i64));
        assert!(!is_advisor_of(&ctx, "five"));
        assert!(!is_advisor_of(&ctx, &None::<i64>));
    }

    #[test]
    fn advisor_needs_session_and_role() {
        assert!(!is_advisor_of(&Identity::advisor(1, 5).logged_out(), &5i64));
        assert!(!is_advisor_of(&Identity::chair(1, 5), &5i64));
        assert!(!is_advisor_of(&Identity::anonymous(), &-1i64));
    }

    #[test]
    fn chair_matches_own_committee() {
        let ctx = Identity::chair(2, 3);
        assert!(is_chair_of(&ctx, &3i64));
        assert!(is_chair_of(&ctx, "3"));
        assert!(!is_chair_of(&ctx, &4i64));
        assert!(!is_chair_of(&ctx.clone().logged_out(), &3i64));
        assert!(!is_chair_of(&Identity::advisor(2, 3), &3i64));
    }

    #[test]
    fn delegate_matches_own_id() {
        let ctx = Identity::delegate(3, 9);
        assert!(is_delegate_of(&ctx, &9i64, None, None));
        assert!(is_delegate_of(&ctx, "9", None, None));
        assert!(!is_delegate_of(&ctx, &10i64, None, None));
        assert!(!is_delegate_of(&Identity::advisor(3, 9), &9i64, None, None));
    }

    #[test]
    fn delegate_matches_through_relation() {
        let ctx = Identity::delegate(3, 9);
        let own = record();
        let school = Some(Relation::School);

        assert!(is_delegate_of(&ctx, &5i64, school, Some(&own)));
        assert!(!is_delegate_of(&ctx, &6i64, school, Some(&own)));
        assert!(is_delegate_of(
            &ctx, &42i64, Some(Relation::Assignment), Some(&own)));
        assert!(!is_delegate_of(&ctx, &5i64, school, None));
    }

    #[test]
    fn missing_link_does_not_match() {
        let ctx = Identity::delegate(3, 9);
        let own = Delegate { id: 9, school_id: None, assignment: None };

        assert!(!is_delegate_of(
            &ctx, &5i64, Some(Relation::School), Some(&own)));
        assert!(!is_delegate_of(
            &ctx, &42i64, Some(Relation::Assignment), Some(&own)));
    }
}
