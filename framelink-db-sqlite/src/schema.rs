///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        name -> Text,
        email -> Text,
        role -> SmallInt,
        country -> Nullable<Text>,
        active -> Bool,
    }
}

///////////////////////////////////////////////////////////////////////
// Applications
///////////////////////////////////////////////////////////////////////

table! {
    applications (id) {
        id -> Text,
        user_id -> Text,
        name -> Text,
        email -> Text,
        experience -> Text,
        specialization -> Text,
        portfolio -> Nullable<Text>,
        bio -> Text,
        status -> SmallInt,
        submitted_at -> BigInt,
    }
}

table! {
    application_images (application_id, pos) {
        application_id -> Text,
        pos -> Integer,
        url -> Text,
    }
}

joinable!(applications -> users (user_id));
joinable!(application_images -> applications (application_id));

///////////////////////////////////////////////////////////////////////
// Profiles
///////////////////////////////////////////////////////////////////////

table! {
    photographer_profiles (id) {
        id -> Text,
        name -> Text,
        email -> Text,
        bio -> Text,
        specialization -> Text,
        country -> Nullable<Text>,
        avatar_url -> Nullable<Text>,
        availability -> SmallInt,
        verified -> Bool,
    }
}

///////////////////////////////////////////////////////////////////////
// Photos
///////////////////////////////////////////////////////////////////////

table! {
    photos (id) {
        id -> Text,
        photographer_id -> Text,
        url -> Text,
        caption -> Text,
        approved -> Bool,
        likes -> BigInt,
        created_at -> BigInt,
    }
}

table! {
    photo_likes (user_id, photo_id) {
        user_id -> Text,
        photo_id -> Text,
        created_at -> BigInt,
    }
}

table! {
    photo_comments (id) {
        id -> Text,
        photo_id -> Text,
        user_id -> Text,
        text -> Text,
        created_at -> BigInt,
    }
}

joinable!(photos -> users (photographer_id));
joinable!(photo_likes -> photos (photo_id));
joinable!(photo_comments -> photos (photo_id));

allow_tables_to_appear_in_same_query!(
    users,
    applications,
    application_images,
    photographer_profiles,
    photos,
    photo_likes,
    photo_comments,
);
