/// The staff and student roles. A superuser is not a role, it's a bypass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Advisor,
    Chair,
    Delegate
}

/// Who is asking. Built once from the authenticated session and never
/// changed afterwards.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub superuser: bool,
    #[serde(default)]
    pub advisor: bool,
    #[serde(default)]
    pub chair: bool,
    #[serde(default)]
    pub delegate: bool,

    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub school_id: Option<i64>,
    #[serde(default)]
    pub committee_id: Option<i64>,
    #[serde(default)]
    pub delegate_id: Option<i64>
}

impl Identity {
    pub fn anonymous() -> Identity {
        Identity::default()
    }

    pub fn superuser(user: i64) -> Identity {
        Identity {
            authenticated: true,
            superuser: true,
            user_id: Some(user),
            ..Identity::default()
        }
    }

    pub fn advisor(user: i64, school: i64) -> Identity {
        Identity {
            authenticated: true,
            advisor: true,
            user_id: Some(user),
            school_id: Some(school),
            ..Identity::default()
        }
    }

    pub fn chair(user: i64, committee: i64) -> Identity {
        Identity {
            authenticated: true,
            chair: true,
            user_id: Some(user),
            committee_id: Some(committee),
            ..Identity::default()
        }
    }

    pub fn delegate(user: i64, delegate: i64) -> Identity {
        Identity {
            authenticated: true,
            delegate: true,
            user_id: Some(user),
            delegate_id: Some(delegate),
            ..Identity::default()
        }
    }

    /// The single role this identity holds. Anything but exactly one role
    /// flag is an unrecognized combination and yields nothing.
    pub fn role(&self) -> Option<Role> {
        match (self.advisor, self.chair, self.delegate) {
            (true, false, false) => Some(Role::Advisor),
            (false, true, false) => Some(Role::Chair),
            (false, false, true) => Some(Role::Delegate),
            _ => None
        }
    }

    /// Returns the same identity with the session marked as logged out.
    pub fn logged_out(self) -> Identity {
        Identity { authenticated: false, ..self }
    }
}
