pub const USERS_JSON: &str = r#"
[
    {
        "id": 1,
        "name": "Ann",
        "username": "ann",
        "email": "a@x",
        "address": { "street": "Main", "city": "X" }
    },
    {
        "id": 2,
        "name": "Bob",
        "username": "bob",
        "email": "b@y",
        "address": { "street": "Side", "city": "Y" }
    },
    {
        "id": 3,
        "name": "Clementine Bauch",
        "username": "Samantha",
        "email": "Nathan@yesenia.net",
        "address": { "street": "Douglas Extension", "city": "McKenziehaven" }
    }
]
"#;
