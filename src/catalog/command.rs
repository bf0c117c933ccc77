pub mod add_album_cmd;
pub mod get_album_cmd;
pub mod list_albums_cmd;
