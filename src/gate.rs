use conditions::{self, Cache, Failure};
use identity::Identity;
use request::Request;
use resolver::Resolver;
use std::fmt;

/// The verdict on one request. `NotFound` is kept apart from `Deny` so the
/// caller can answer 404 instead of 403.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
    NotFound
}

impl Decision {
    pub fn to_str(self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Deny => "deny",
            Decision::NotFound => "not_found"
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Decides whether `identity` may carry out `request`, looking up whatever
/// ownership the matching rule needs through `resolver`.
pub fn authorize<R: Resolver + ?Sized>(
    identity: &Identity,
    request: &Request,
    resolver: &R
) -> Decision {
    if identity.superuser {
        debug!("{:?} {:?}: superuser.", request.policy, request.method);
        return Decision::Allow;
    }

    let rule = conditions::lookup(request.policy, request.action());
    let mut cache = Cache::empty(identity, request, resolver);

    let decision = match rule.check(&mut cache) {
        Ok(true) => Decision::Allow,
        Ok(false) => Decision::Deny,
        Err(Failure::NotFound(resource, id)) => {
            info!("{:?} {} does not exist.", resource, id);
            Decision::NotFound
        },
        Err(Failure::InvalidInput(what)) => {
            warn!("Refusing {:?} {:?}: malformed {}.",
                request.policy, request.method, what);
            Decision::Deny
        }
    };

    debug!("{:?} {:?}: {}.", request.policy, request.method, decision);
    decision
}
