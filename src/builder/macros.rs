//! Macros for ergonomic cursor construction.

/// Build a [`Cursor`](crate::core::Cursor) for one `Arc` field of a
/// `Clone` state struct.
///
/// The cursor key is the field name. Chain deeper paths with
/// [`Cursor::then`](crate::core::Cursor::then).
///
/// # Example
///
/// ```
/// use cursorflux::cursor;
/// use std::sync::Arc;
///
/// #[derive(Clone)]
/// struct Settings {
///     theme: Arc<String>,
///     font_size: Arc<u8>,
/// }
///
/// #[derive(Clone)]
/// struct App {
///     settings: Arc<Settings>,
/// }
///
/// let font_size = cursor!(App => settings).then(&cursor!(Settings => font_size));
/// assert_eq!(font_size.key(), "settings.font_size");
///
/// let app = Arc::new(App {
///     settings: Arc::new(Settings {
///         theme: Arc::new("dark".into()),
///         font_size: Arc::new(12),
///     }),
/// });
/// let next = font_size.write(&app, Arc::new(14));
///
/// assert_eq!(*next.settings.font_size, 14);
/// assert!(Arc::ptr_eq(&next.settings.theme, &app.settings.theme));
/// ```
#[macro_export]
macro_rules! cursor {
    ($root:ty => $field:ident) => {
        $crate::core::Cursor::<$root, _>::new(
            stringify!($field),
            |state: &::std::sync::Arc<$root>| ::std::sync::Arc::clone(&state.$field),
            |state: &::std::sync::Arc<$root>, value| {
                let mut next: $root = ::std::clone::Clone::clone(&**state);
                next.$field = value;
                ::std::sync::Arc::new(next)
            },
        )
    };
}
