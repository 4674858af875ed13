pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const CONTAINER_SM: &str = "max-w-md mx-auto px-4 sm:px-6 py-6";
pub const CONTAINER_LG: &str = "max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-6";

pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-800/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-gray-900 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 rounded-lg transition-colors duration-200";

pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const CARD_TEXT: &str = "text-sm text-gray-600 dark:text-gray-400";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed transition-colors duration-200";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700 transition-colors duration-200";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-3 py-1.5 text-sm font-medium text-white hover:bg-red-700";

pub const FORM: &str = "mt-4 space-y-4";
pub const INPUT: &str = "mt-1 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";

pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const LINK: &str = "text-blue-600 dark:text-blue-400 hover:text-blue-700 dark:hover:text-blue-300 transition-colors duration-200";

pub const ALERT_SUCCESS: &str = "p-3 rounded-lg bg-green-100 text-green-800 dark:bg-green-800 dark:text-green-100 text-sm shadow-md";
pub const ALERT_ERROR: &str = "p-3 rounded-lg bg-red-100 text-red-800 dark:bg-red-800 dark:text-red-100 text-sm shadow-md";
pub const ALERT_WARNING: &str = "p-3 rounded-lg bg-yellow-100 text-yellow-800 dark:bg-yellow-800 dark:text-yellow-100 text-sm shadow-md";
pub const ALERT_INFO: &str = "p-3 rounded-lg bg-blue-100 text-blue-800 dark:bg-blue-800 dark:text-blue-100 text-sm shadow-md";

pub const LOADING_SPINNER: &str = "animate-spin rounded-full h-10 w-10 border-t-2 border-b-2 border-blue-500";

// Word-game board and keyboard.
pub const TILE: &str = "w-12 h-12 sm:w-14 sm:h-14 flex items-center justify-center text-2xl font-bold rounded mx-0.5 sm:mx-1";
pub const TILE_CORRECT: &str = "bg-green-500 text-black";
pub const TILE_PRESENT: &str = "bg-yellow-400 text-black";
pub const TILE_ABSENT: &str = "bg-gray-400 dark:bg-gray-600 text-black dark:text-white";
pub const TILE_PENDING: &str = "bg-white dark:bg-gray-800 text-gray-900 dark:text-white ring-2 ring-blue-400";
pub const TILE_EMPTY: &str = "bg-gray-100 dark:bg-gray-700 ring-1 ring-gray-300 dark:ring-gray-600";
pub const KEY_BUTTON: &str = "h-9 min-w-[1.75rem] px-1 sm:px-2 flex items-center justify-center text-sm font-bold rounded mx-0.5 cursor-pointer";
pub const KEY_UNUSED: &str = "bg-gray-200 dark:bg-gray-700 text-gray-900 dark:text-white";
