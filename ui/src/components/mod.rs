//! Small component library: the buttons, inputs, dialogs, and table pieces the
//! views compose. Styling comes from semantic classes in the platform CSS.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod form_field;
pub use form_field::FormField;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod table;
pub use table::{Table, TableBody, TableCell, TableHead, TableHeader, TableRow};
