mod home;
pub use home::Home;

mod sign_in;
pub use sign_in::SignIn;

mod sign_up;
pub use sign_up::SignUp;

mod not_found;
pub use not_found::NotFound;
