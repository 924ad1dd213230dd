//! Paths of the REST endpoints the dashboard calls, relative to the API base URL.

use url::form_urlencoded;

pub const LOGIN: &str = "/auth/login";
pub const CURRENT_PROFILE: &str = "/users/profile/me";
pub const PAYMENTS: &str = "/payment/payments";
pub const SUBSCRIPTIONS: &str = "/payment/subscriptions";
pub const BRANDS: &str = "/brands";
pub const USER_TEAMS: &str = "/team/user-teams";

/// Query for the user directory. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search_term: Option<String>,
    pub sort_by: Option<String>,
    pub sort_descending: Option<bool>,
}

fn with_query(path: String, query: String) -> String {
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

pub fn user_search(params: &UserSearch) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(page) = params.page.filter(|page| *page > 0) {
        query.append_pair("page", &page.to_string());
    }
    if let Some(page_size) = params.page_size.filter(|size| *size > 0) {
        query.append_pair("pageSize", &page_size.to_string());
    }
    if let Some(term) = params.search_term.as_deref().filter(|term| !term.is_empty()) {
        query.append_pair("searchTerm", term);
    }
    if let Some(sort_by) = params.sort_by.as_deref().filter(|sort_by| !sort_by.is_empty()) {
        query.append_pair("sortBy", sort_by);
    }
    if let Some(descending) = params.sort_descending {
        query.append_pair("sortDescending", if descending { "true" } else { "false" });
    }
    with_query("/users".to_string(), query.finish())
}

pub fn user_by_id(user_id: &str) -> String {
    format!("/users/{user_id}")
}

pub fn profiles_by_user(user_id: &str, search: Option<&str>, is_deleted: Option<bool>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(search) = search.filter(|search| !search.is_empty()) {
        query.append_pair("search", search);
    }
    if let Some(is_deleted) = is_deleted {
        query.append_pair("isDeleted", if is_deleted { "true" } else { "false" });
    }
    with_query(format!("/profiles/user/{user_id}"), query.finish())
}

/// Social accounts linked to a profile. The API names the segment `user`
/// but expects a profile id.
pub fn social_accounts_by_profile(profile_id: &str) -> String {
    format!("/social/accounts/user/{profile_id}")
}

pub fn user_payments(user_id: &str) -> String {
    format!("/payment/admin/user/{user_id}/payments")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_user_search_has_no_query() {
        assert_eq!(user_search(&UserSearch::default()), "/users");
    }

    #[test]
    fn test_user_search_encodes_parameters_in_order() {
        let path = user_search(&UserSearch {
            page: Some(2),
            page_size: Some(20),
            search_term: Some("a b@x.com".into()),
            sort_by: Some("email".into()),
            sort_descending: Some(false),
        });
        assert_eq!(
            path,
            "/users?page=2&pageSize=20&searchTerm=a+b%40x.com&sortBy=email&sortDescending=false"
        );
    }

    #[test]
    fn test_zero_page_is_omitted() {
        let path = user_search(&UserSearch {
            page: Some(0),
            ..UserSearch::default()
        });
        assert_eq!(path, "/users");
    }

    #[test]
    fn test_profile_paths() {
        assert_eq!(profiles_by_user("u-1", None, None), "/profiles/user/u-1");
        assert_eq!(
            profiles_by_user("u-1", Some("main"), Some(false)),
            "/profiles/user/u-1?search=main&isDeleted=false"
        );
        assert_eq!(social_accounts_by_profile("pr-1"), "/social/accounts/user/pr-1");
        assert_eq!(user_by_id("u-1"), "/users/u-1");
        assert_eq!(user_payments("u-1"), "/payment/admin/user/u-1/payments");
    }
}
