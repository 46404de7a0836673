/// The ownership facts the rules need about a delegate.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Delegate {
    pub id: i64,
    #[serde(default)]
    pub school_id: Option<i64>,
    #[serde(default)]
    pub assignment: Option<AssignmentLink>
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AssignmentLink {
    pub id: i64,
    pub committee_id: i64
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub committee_id: i64,
    pub registration: RegistrationLink
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegistrationLink {
    pub id: i64,
    pub school_id: i64
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Registration {
    pub id: i64,
    pub school_id: i64
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct School {
    pub id: i64,
    #[serde(default)]
    pub advisor_id: Option<i64>
}

/// Looks up ownership records by id. `None` means the row doesn't exist;
/// transport trouble is the implementor's business, not the rules'.
pub trait Resolver {
    fn delegate(&self, id: i64) -> Option<Delegate>;
    fn assignment(&self, id: i64) -> Option<Assignment>;
    fn registration(&self, id: i64) -> Option<Registration>;
    fn school(&self, id: i64) -> Option<School>;
}

impl<'a, R: Resolver + ?Sized> Resolver for &'a R {
    fn delegate(&self, id: i64) -> Option<Delegate> {
        (**self).delegate(id)
    }

    fn assignment(&self, id: i64) -> Option<Assignment> {
        (**self).assignment(id)
    }

    fn registration(&self, id: i64) -> Option<Registration> {
        (**self).registration(id)
    }

    fn school(&self, id: i64) -> Option<School> {
        (**self).school(id)
    }
}
