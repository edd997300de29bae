//! Navigation shell routes

/// A top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Customers,
    Departments,
    Projects,
    TimeEntries,
}

impl Route {
    /// Navigation order
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Customers,
        Route::Departments,
        Route::Projects,
        Route::TimeEntries,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Customers => "/customers",
            Route::Departments => "/departments",
            Route::Projects => "/projects",
            Route::TimeEntries => "/time",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Customers => "Customers",
            Route::Departments => "Departments",
            Route::Projects => "Projects",
            Route::TimeEntries => "Time",
        }
    }
}

/// Mobile menu state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a link closes the menu
    pub fn navigate(&mut self) {
        self.menu_open = false;
    }
}
