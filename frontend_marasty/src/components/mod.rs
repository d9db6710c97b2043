pub mod call_to_action;
pub mod contributor_list;
