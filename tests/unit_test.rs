// Unit tests for usercards
// These exercise the public API only: filtering, card rendering, the store.

fn mk_user(id: u64, name: &str, email: &str, city: &str) -> usercards::api::UserRecord {
    usercards::api::UserRecord {
        id,
        name: name.to_string(),
        username: format!("user{id}"),
        email: email.to_string(),
        phone: format!("1-770-736-80{id:02}"),
        website: format!("site{id}.org"),
        address: usercards::api::Address {
            city: city.to_string(),
        },
    }
}

fn sample_users() -> Vec<usercards::api::UserRecord> {
    vec![
        mk_user(1, "Leanne Graham", "Sincere@april.biz", "Gwenborough"),
        mk_user(2, "Ervin Howell", "Shanna@melissa.tv", "Wisokyburgh"),
        mk_user(3, "Clementine Bauch", "Nathan@yesenia.net", "McKenziehaven"),
        mk_user(4, "Patricia Lebsack", "Julianne.OConner@kory.org", "South Elvis"),
        mk_user(5, "Chelsey Dietrich", "Lucio_Hettinger@annie.ca", "Roscoeview"),
        mk_user(6, "Mrs. Dennis Schulist", "Karley_Dach@jasper.info", "South Christy"),
        mk_user(7, "Kurtis Weissnat", "Telly.Hoeger@billy.biz", "Howemouth"),
        mk_user(8, "Nicholas Runolfsdottir V", "Sherwood@rosamond.me", "Aliyaview"),
        mk_user(9, "Glenna Reichert", "Chaim_McDermott@dana.io", "Bartholomebury"),
        mk_user(10, "Clementina DuBuque", "Rey.Padberg@karina.biz", "Lebsackbury"),
        mk_user(11, "Ada Lindqvist", "ada@example.com", "Lindenwood"),
    ]
}

#[cfg(test)]
mod filter_tests {
    use super::*;
    use usercards::search::filter_users;

    fn matches(u: &usercards::api::UserRecord, q: &str) -> bool {
        let q = q.to_lowercase();
        u.name.to_lowercase().contains(&q)
            || u.email.to_lowercase().contains(&q)
            || u.address.city.to_lowercase().contains(&q)
    }

    #[test]
    fn test_filter_yields_ordered_subsequence_of_matches() {
        let users = sample_users();
        for q in ["a", "SOUTH", "biz", "lind", "Cle", "x", "howe", " "] {
            let out = filter_users(&users, q);

            // every returned record matches
            assert!(out.iter().all(|u| matches(u, q)), "query {q:?}");

            // every excluded record does not match
            let kept: Vec<u64> = out.iter().map(|u| u.id).collect();
            for u in users.iter().filter(|u| !kept.contains(&u.id)) {
                assert!(!matches(u, q), "query {q:?} excluded {}", u.name);
            }

            // original relative order
            let positions: Vec<usize> = out
                .iter()
                .map(|u| users.iter().position(|o| o.id == u.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {q:?}");
        }
    }

    #[test]
    fn test_empty_query_is_identity() {
        let users = sample_users();
        assert_eq!(filter_users(&users, ""), users);
    }

    #[test]
    fn test_lindenwood_matches_regardless_of_case() {
        let users = sample_users();
        for q in ["lindenwood", "LINDENWOOD", "LindenWood"] {
            let out = filter_users(&users, q);
            assert_eq!(out.len(), 1);
            assert_eq!(out[0].address.city, "Lindenwood");
        }
    }

    #[test]
    fn test_filter_on_empty_set() {
        assert!(filter_users(&[], "anything").is_empty());
        assert!(filter_users(&[], "").is_empty());
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use usercards::view::{NO_RESULTS_MESSAGE, ResultsView, monogram, render};

    #[test]
    fn test_render_empty_shows_message_and_no_cards() {
        let view = render(&[]);
        assert!(view.cards().is_empty());
        assert_eq!(view.message(), Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_render_two_cards_in_order() {
        let users = sample_users();
        let r1 = users[5].clone();
        let r2 = users[0].clone();
        let view = render(&[r1.clone(), r2.clone()]);
        let ResultsView::Cards(cards) = view else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        for (card, rec) in cards.iter().zip([&r1, &r2]) {
            assert_eq!(card.name, rec.name);
            assert_eq!(card.username, rec.username);
            assert_eq!(card.email, rec.email);
            assert_eq!(card.phone, rec.phone);
            assert_eq!(card.city, rec.address.city);
            assert_eq!(card.website_url, format!("https://{}", rec.website));
        }
        assert_eq!(cards[0].monogram, "MDS");
        assert_eq!(cards[1].monogram, "LG");
    }

    #[test]
    fn test_monogram_examples() {
        assert_eq!(monogram("Leanne Graham"), "LG");
        assert_eq!(monogram("Clementine"), "C");
        assert_eq!(monogram("Nicholas Runolfsdottir V"), "NRV");
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;
    use usercards::store::UserStore;

    #[test]
    fn test_latest_load_wins_even_if_older_finishes_last() {
        let mut store = UserStore::new();
        let older = store.begin_load();
        let newer = store.begin_load();
        assert!(store.commit(newer, sample_users()));
        assert!(!store.commit(older, vec![]));
        assert_eq!(store.len(), 11);
    }
}
