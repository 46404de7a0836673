permissions! {
// These are the rules, one row per endpoint and action.
// The first bit is the endpoint, then the actions the row covers, then the
// condition that needs to be met. Superusers skip the table entirely, and an
// action with no row is refused.
//
// There are the following conditions:
// - advisor_of(TARGET): An advisor, of the target school.
// - chair_of(TARGET): A chair, of the target committee.
// - delegate_is(TARGET): A delegate, and the target is one's own record.
// - delegate_of(TARGET, School | Assignment): A delegate whose own record
//   links to the target through that relation.
// - own(TARGET): The target is one's own user.
// - advises(TARGET): One is the recorded advisor of the target school.
// - role(Advisor | Chair | Delegate): Logged in with exactly that role.
// - get: The request is a GET. Read also covers HEAD and OPTIONS, which
//   some endpoints keep to the advisor.
// - committee_batch: Every delegate in the body is on one's committee.
// - school_batch: Every delegate in the body is from one's school.
// - any(CONDITION, ...): One or more of the given conditions needs to be met.
// - all(CONDITION, ...): All of the given conditions need to be met.
// - anyone: Use this if there are no conditions to be met.
//
// And the following targets:
// - path_id: The id in the path.
// - query_school, query_committee: The school_id and committee_id params.
// - payload_school: The body's school.
// - delegate_school, delegate_committee: The path delegate's school, and
//   its assignment's committee.
// - assignment_school, assignment_committee: The path assignment's
//   registration's school, and its committee.
// - registration_school: The path registration's school.
// - password_school: The school of the body's delegate_id.

[ SchoolDetail Read => any(
    advisor_of(path_id),
    all(get, delegate_of(path_id, School))
) ]
[ SchoolDetail Create | Update | Delete => advisor_of(path_id) ]

[ DelegateDetail Read | Create | Update => any(
    advisor_of(delegate_school),
    chair_of(delegate_committee),
    delegate_is(path_id)
) ]
[ DelegateDetail Delete => advisor_of(delegate_school) ]

[ DelegateList Read => any(chair_of(query_committee), advisor_of(query_school)) ]
[ DelegateList Create => advisor_of(payload_school) ]
[ DelegateList Update => any(
    all(role(Chair), committee_batch),
    all(role(Advisor), school_batch)
) ]

[ AssignmentDetail Read => any(
    advisor_of(assignment_school),
    all(get, any(
        chair_of(assignment_committee),
        delegate_of(path_id, Assignment)
    ))
) ]
[ AssignmentDetail Create | Update | Delete => advisor_of(assignment_school) ]

[ AssignmentList Read => any(chair_of(query_committee), advisor_of(query_school)) ]

[ RegistrationList Create => anyone ]
[ RegistrationList Read => advisor_of(query_school) ]

[ RegistrationDetail Read | Create | Update | Delete =>
    advisor_of(registration_school) ]

[ DelegatePassword Update => advisor_of(password_school) ]

[ CreateOnly Create => anyone ]
[ ReadOnly Read => anyone ]

[ OwnUser Read | Create | Update | Delete => own(path_id) ]
[ SchoolAdvisor Read | Create | Update | Delete => advises(path_id) ]
[ SchoolByPath Read | Create | Update | Delete => advisor_of(path_id) ]
[ AssignmentAdvisor Read | Create | Update | Delete =>
    advisor_of(assignment_school) ]
}
