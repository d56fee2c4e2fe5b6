diesel::table! {
    dining_tables (id) {
        id -> Integer,
        floor_id -> Nullable<Integer>,
        name -> Text,
        capacity -> Integer,
        state -> Text,
    }
}

diesel::table! {
    dishes (id) {
        id -> Integer,
        name -> Text,
        description -> Nullable<Text>,
        price -> Integer,
        category -> Text,
        image -> Nullable<Text>,
    }
}

diesel::table! {
    employee_profiles (id) {
        id -> Integer,
        user_id -> Integer,
        national_id -> Text,
        birth_date -> Date,
        nationality -> Text,
    }
}

diesel::table! {
    floors (id) {
        id -> Integer,
        name -> Text,
        position -> Integer,
    }
}

diesel::table! {
    incidents (id) {
        id -> Integer,
        category -> Text,
        message -> Text,
        seen -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    order_items (id) {
        id -> Integer,
        order_id -> Integer,
        dish_id -> Integer,
        quantity -> Integer,
    }
}

diesel::table! {
    orders (id) {
        id -> Integer,
        table_id -> Integer,
        completed -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    reservations (id) {
        id -> Integer,
        table_id -> Nullable<Integer>,
        client_name -> Text,
        reserved_for -> Timestamp,
        party_size -> Integer,
        notes -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    users (id) {
        id -> Integer,
        email -> Text,
        name -> Text,
        password_hash -> Text,
        is_admin -> Bool,
        created_at -> Timestamp,
    }
}

diesel::joinable!(dining_tables -> floors (floor_id));
diesel::joinable!(employee_profiles -> users (user_id));
diesel::joinable!(order_items -> dishes (dish_id));
diesel::joinable!(order_items -> orders (order_id));
diesel::joinable!(orders -> dining_tables (table_id));
diesel::joinable!(reservations -> dining_tables (table_id));

diesel::allow_tables_to_appear_in_same_query!(
    dining_tables,
    dishes,
    employee_profiles,
    floors,
    incidents,
    order_items,
    orders,
    reservations,
    users,
);
