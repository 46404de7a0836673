#![allow(non_camel_case_types)]

use id::AsId;
use identity::{Identity, Role};
use predicates::{self, Relation};
use request::{Method, Request, Resource};
use resolver::{Assignment, Delegate, Registration, Resolver, School};
pub use self::user_defined::lookup;

/// Why a rule couldn't reach a verdict.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    NotFound(Resource, i64),
    InvalidInput(&'static str)
}

/// Where a condition gets the id it compares against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    path_id,
    query_school,
    query_committee,
    payload_school,
    delegate_school, // The school of the delegate at the path.
    delegate_committee, // Its assignment's committee, if it has one.
    assignment_school,
    assignment_committee,
    registration_school,
    password_school // The school of the delegate named in the body.
}

#[derive(Copy, Clone, Debug)]
pub enum Conditions {
    anyone,
    nobody,
    get, // A plain GET, not just any safe method.
    all(&'static [Conditions]),
    any(&'static [Conditions]),
    role(Role), // Logged in with exactly this role.
    advisor_of(Target),
    chair_of(Target),
    delegate_is(Target), // The target is one's own delegate record.
    delegate_of(Target, Relation), // One's own delegate record links to it.
    own(Target), // The target is oneself.
    advises(Target), // One is the recorded advisor of the target school.
    committee_batch, // Every delegate in the body sits on one's committee.
    school_batch // Every delegate in the body is from one's school.
}

/// Everything one decision has looked up so far. Lives exactly as long as
/// the decision does.
pub struct Cache<'a, R: Resolver + ?Sized + 'a> {
    pub identity: &'a Identity,
    pub request: &'a Request,
    resolver: &'a R,
    delegate: Option<Delegate>,
    assignment: Option<Assignment>,
    registration: Option<Registration>,
    own: Option<Option<Delegate>>
}

fn fetch<T, F>(slot: &mut Option<T>, found: F) -> Result<&T, Failure>
    where F: FnOnce() -> Result<T, Failure>
{
    let value = match slot.take() {
        Some(value) => value,
        None => found()?
    };

    Ok(slot.insert(value))
}

impl<'a, R: Resolver + ?Sized + 'a> Cache<'a, R> {
    pub fn empty(
        identity: &'a Identity,
        request: &'a Request,
        resolver: &'a R
    ) -> Cache<'a, R> {
        Cache {
            identity: identity,
            request: request,
            resolver: resolver,
            delegate: None,
            assignment: None,
            registration: None,
            own: None
        }
    }

    fn key(&self) -> Result<i64, Failure> {
        self.request.key().ok_or(Failure::InvalidInput("path id"))
    }

    pub fn delegate(&mut self) -> Result<&Delegate, Failure> {
        let (resolver, key) = (self.resolver, self.key());
        fetch(&mut self.delegate, || {
            let id = key?;
            resolver.delegate(id)
                .ok_or(Failure::NotFound(Resource::Delegate, id))
        })
    }

    pub fn assignment(&mut self) -> Result<&Assignment, Failure> {
        let (resolver, key) = (self.resolver, self.key());
        fetch(&mut self.assignment, || {
            let id = key?;
            resolver.assignment(id)
                .ok_or(Failure::NotFound(Resource::Assignment, id))
        })
    }

    pub fn registration(&mut self) -> Result<&Registration, Failure> {
        let (resolver, key) = (self.resolver, self.key());
        fetch(&mut self.registration, || {
            let id = key?;
            resolver.registration(id)
                .ok_or(Failure::NotFound(Resource::Registration, id))
        })
    }

    pub fn school(&self, id: i64) -> Result<School, Failure> {
        self.resolver.school(id)
            .ok_or(Failure::NotFound(Resource::School, id))
    }

    /// The requester's own delegate record. Not having one isn't a failure,
    /// it just means nothing links to it.
    pub fn own(&mut self) -> Option<&Delegate> {
        if self.own.is_none() {
            let resolver = self.resolver;
            let record = self.identity.delegate_id
                .and_then(|id| resolver.delegate(id));
            self.own = Some(record);
        }

        self.own.as_ref().and_then(Option::as_ref)
    }

    pub fn target(&mut self, target: Target) -> Result<Option<i64>, Failure> {
        use self::Target::*;

        Ok(match target {
            path_id =>
                self.request.key(),
            query_school =>
                self.request.query_id("school_id"),
            query_committee =>
                self.request.query_id("committee_id"),
            payload_school =>
                self.request.field("school").as_id(),
            delegate_school =>
                self.delegate()?.school_id,
            delegate_committee =>
                self.delegate()?.assignment.as_ref().map(|a| a.committee_id),
            assignment_school =>
                Some(self.assignment()?.registration.school_id),
            assignment_committee =>
                Some(self.assignment()?.committee_id),
            registration_school =>
                Some(self.registration()?.school_id),
            password_school => {
                let id = match self.request.field("delegate_id").as_id() {
                    Some(id) => id,
                    None => return Ok(None)
                };

                self.resolver.delegate(id)
                    .ok_or(Failure::NotFound(Resource::Delegate, id))?
                    .school_id
            }
        })
    }

    /// Every delegate a bulk body names, all of them or nothing.
    pub fn batch(&self) -> Result<Vec<Delegate>, Failure> {
        let ids = self.request.batch()
            .ok_or(Failure::InvalidInput("bulk body"))?;

        ids.into_iter()
            .map(|id| {
                let id = id.ok_or(Failure::InvalidInput("bulk id"))?;
                self.resolver.delegate(id)
                    .ok_or(Failure::NotFound(Resource::Delegate, id))
            })
            .collect()
    }
}

impl Conditions {
    pub fn check<R: Resolver + ?Sized>(
        &self,
        cache: &mut Cache<R>
    ) -> Result<bool, Failure> {
        use self::Conditions::*;

        let me = cache.identity;

        match *self {
            anyone =>
                Ok(true),
            nobody =>
                Ok(false),
            get =>
                Ok(cache.request.method == Method::Get),
            all(parts) => {
                for part in parts {
                    if !part.check(cache)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            },
            any(parts) => {
                for part in parts {
                    if part.check(cache)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            },
            role(wanted) =>
                Ok(me.authenticated && me.role() == Some(wanted)),
            advisor_of(target) =>
                Ok(predicates::is_advisor_of(me, &cache.target(target)?)),
            chair_of(target) =>
                Ok(predicates::is_chair_of(me, &cache.target(target)?)),
            delegate_is(target) =>
                Ok(predicates::is_delegate_of(
                    me, &cache.target(target)?, None, None)),
            delegate_of(target, relation) => {
                let id = cache.target(target)?;
                let record = cache.own();
                Ok(predicates::is_delegate_of(me, &id, Some(relation), record))
            },
            own(target) => {
                let id = cache.target(target)?;
                Ok(me.authenticated && me.user_id.is_some() &&
                    me.user_id == id)
            },
            advises(target) => {
                let school = match cache.target(target)? {
                    Some(id) => cache.school(id)?,
                    None => return Ok(false)
                };
                Ok(me.authenticated && me.user_id.is_some() &&
                    me.user_id == school.advisor_id)
            },
            committee_batch =>
                Ok(cache.batch()?.iter().all(|delegate| {
                    let committee = delegate.assignment.as_ref()
                        .map(|a| a.committee_id);
                    predicates::is_chair_of(me, &committee)
                })),
            school_batch =>
                Ok(cache.batch()?.iter().all(|delegate| {
                    predicates::is_advisor_of(me, &delegate.school_id)
                }))
        }
    }
}

// Credit goes to [@krdln](users.rust-lang.org/users/krdln).
macro_rules! cond {
    // Nothing left to split, hand back the list.
    (@array $array:tt {}) => {
        $array
    };

    // A comma closes the current item, which may itself be nested.
    (@array [ $($array:tt)* ] { $($current:tt)* } , $($tail:tt)*) => {
        cond!(@array [ $($array)* cond!($($current)*) , ] {} $($tail)* )
    };

    // Any other token belongs to the current item.
    (@array $array:tt { $($current:tt)* } $x:tt $($tail:tt)*) => {
        cond!(@array $array { $($current)* $x } $($tail)* )
    };

    // Close the last item.
    (@array $array:tt $current:tt) => {
        cond!(@array $array $current ,)
    };

    (all( $($tt:tt)* )) => {
        all(&cond!( @array [] {} $($tt)* ))
    };
    (any( $($tt:tt)* )) => {
        any(&cond!( @array [] {} $($tt)* ))
    };
    ($x:expr) => {
        $x
    };
}

macro_rules! permissions {
    ($( [ $policy:ident $( $action:ident )|+ => $($y:tt)* ] )*) => {
        use $crate::conditions::Conditions;
        use $crate::conditions::Conditions::*;
        use $crate::conditions::Target::*;
        use $crate::identity::Role::*;
        use $crate::predicates::Relation::*;
        use $crate::request::{Action, Policy};

        /// The rule for an action on an endpoint. Pairs without a row
        /// are refused.
        pub fn lookup(policy: Policy, action: Action) -> Conditions {
            match (policy, action) {
                $( (Policy::$policy, $( Action::$action )|+) => {
                    const RULE: Conditions = cond!( $($y)* );
                    RULE
                } )*
                _ => nobody
            }
        }
    };
}

mod user_defined {
    include!(concat!(env!("CARGO_MANIFEST_DIR"), "/permissions.rs"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use request::{Method, Policy};
    use resolver::AssignmentLink;
    use roster::Roster;

    fn roster() -> Roster {
        let mut roster = Roster::new();
        roster
            .add_delegate(Delegate {
                id: 9,
                school_id: Some(5),
                assignment: Some(AssignmentLink { id: 42, committee_id: 3 })
            })
            .add_delegate(Delegate { id: 10, school_id: Some(5), assignment: None })
            .add_registration(Registration { id: 1, school_id: 5 });
        roster
    }

    #[test]
    fn targets_come_from_the_request() {
        let roster = roster();
        let me = Identity::advisor(1, 5);
        let req = Request::new(Policy::DelegateList, Method::Get)
            .with_query("school_id", "5");
        let mut cache = Cache::empty(&me, &req, &roster);

        assert_eq!(cache.target(Target::query_school), Ok(Some(5)));
        assert_eq!(cache.target(Target::query_committee), Ok(None));
        assert_eq!(cache.target(Target::path_id), Ok(None));
    }

    #[test]
    fn targets_follow_ownership() {
        let roster = roster();
        let me = Identity::chair(1, 3);
        let req = Request::new(Policy::DelegateDetail, Method::Get)
            .with_id("9");
        let mut cache = Cache::empty(&me, &req, &roster);

        assert_eq!(cache.target(Target::delegate_school), Ok(Some(5)));
        assert_eq!(cache.target(Target::delegate_committee), Ok(Some(3)));
    }

    #[test]
    fn unassigned_delegate_has_no_committee() {
        let roster = roster();
        let me = Identity::chair(1, 3);
        let req = Request::new(Policy::DelegateDetail, Method::Get)
            .with_id("10");
        let mut cache = Cache::empty(&me, &req, &roster);

        assert_eq!(cache.target(Target::delegate_committee), Ok(None));
    }

    #[test]
    fn missing_rows_are_not_found() {
        let roster = roster();
        let me = Identity::advisor(1, 5);
        let req = Request::new(Policy::AssignmentDetail, Method::Get)
            .with_id("42");
        let mut cache = Cache::empty(&me, &req, &roster);

        assert_eq!(cache.target(Target::assignment_school),
                   Err(Failure::NotFound(Resource::Assignment, 42)));
    }

    #[test]
    fn bad_path_ids_are_invalid() {
        let roster = roster();
        let me = Identity::advisor(1, 5);
        let req = Request::new(Policy::RegistrationDetail, Method::Get)
            .with_id("one");
        let mut cache = Cache::empty(&me, &req, &roster);

        assert_eq!(cache.target(Target::registration_school),
                   Err(Failure::InvalidInput("path id")));
    }

    #[test]
    fn any_propagates_failures() {
        const EITHER: Conditions = Conditions::any(&[
            Conditions::advisor_of(Target::delegate_school),
            Conditions::anyone
        ]);

        let roster = roster();
        let me = Identity::advisor(1, 5);
        let req = Request::new(Policy::DelegateDetail, Method::Get)
            .with_id("77");
        let mut cache = Cache::empty(&me, &req, &roster);

        assert_eq!(EITHER.check(&mut cache),
                   Err(Failure::NotFound(Resource::Delegate, 77)));
    }

    #[test]
    fn all_stops_at_first_refusal() {
        const BOTH: Conditions = Conditions::all(&[
            Conditions::nobody,
            Conditions::advisor_of(Target::delegate_school)
        ]);

        let roster = roster();
        let me = Identity::advisor(1, 5);
        let req = Request::new(Policy::DelegateDetail, Method::Get)
            .with_id("77");
        let mut cache = Cache::empty(&me, &req, &roster);

        assert_eq!(BOTH.check(&mut cache), Ok(false));
    }

    #[test]
    fn get_is_only_get() {
        let roster = roster();
        let me = Identity::delegate(1, 9);

        for &(method, expected) in &[(Method::Get, true),
                                     (Method::Head, false),
                                     (Method::Options, false),
                                     (Method::Post, false)] {
            let req = Request::new(Policy::SchoolDetail, method);
            let mut cache = Cache::empty(&me, &req, &roster);
            assert_eq!(Conditions::get.check(&mut cache), Ok(expected));
        }
    }

    #[test]
    fn unlisted_pairs_are_refused() {
        let roster = roster();
        let me = Identity::advisor(1, 5);
        let req = Request::new(Policy::AssignmentList, Method::Post);
        let mut cache = Cache::empty(&me, &req, &roster);

        assert_eq!(lookup(Policy::AssignmentList, req.action())
                       .check(&mut cache),
                   Ok(false));
    }
}
