use resolver::{Assignment, Delegate, Registration, Resolver, School};
use serde_json;
use std::collections::HashMap;
use std::io::Read;

/// An in-memory set of ownership records, usually loaded from a JSON file.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    delegates: HashMap<i64, Delegate>,
    assignments: HashMap<i64, Assignment>,
    registrations: HashMap<i64, Registration>,
    schools: HashMap<i64, School>
}

#[derive(Deserialize)]
struct Listing {
    #[serde(default)]
    delegates: Vec<Delegate>,
    #[serde(default)]
    assignments: Vec<Assignment>,
    #[serde(default)]
    registrations: Vec<Registration>,
    #[serde(default)]
    schools: Vec<School>
}

impl Roster {
    pub fn new() -> Roster {
        Roster::default()
    }

    /// Reads a roster of the form
    /// `{"delegates": [..], "assignments": [..], "registrations": [..], "schools": [..]}`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Roster, serde_json::Error> {
        let listing: Listing = serde_json::from_reader(reader)?;
        let mut roster = Roster::new();

        for delegate in listing.delegates {
            roster.add_delegate(delegate);
        }
        for assignment in listing.assignments {
            roster.add_assignment(assignment);
        }
        for registration in listing.registrations {
            roster.add_registration(registration);
        }
        for school in listing.schools {
            roster.add_school(school);
        }

        Ok(roster)
    }

    pub fn add_delegate(&mut self, delegate: Delegate) -> &mut Roster {
        self.delegates.insert(delegate.id, delegate);
        self
    }

    pub fn add_assignment(&mut self, assignment: Assignment) -> &mut Roster {
        self.assignments.insert(assignment.id, assignment);
        self
    }

    pub fn add_registration(
        &mut self,
        registration: Registration
    ) -> &mut Roster {
        self.registrations.insert(registration.id, registration);
        self
    }

    pub fn add_school(&mut self, school: School) -> &mut Roster {
        self.schools.insert(school.id, school);
        self
    }

    pub fn len(&self) -> usize {
        self.delegates.len() + self.assignments.len() +
            self.registrations.len() + self.schools.len()
    }
}

impl Resolver for Roster {
    fn delegate(&self, id: i64) -> Option<Delegate> {
        self.delegates.get(&id).cloned()
    }

    fn assignment(&self, id: i64) -> Option<Assignment> {
        self.assignments.get(&id).cloned()
    }

    fn registration(&self, id: i64) -> Option<Registration> {
        self.registrations.get(&id).cloned()
    }

    fn school(&self, id: i64) -> Option<School> {
        self.schools.get(&id).cloned()
    }
}
