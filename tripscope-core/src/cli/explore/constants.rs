pub const SECTION_RULE: &str =
    "----------------------------------------";

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";

pub const CITY_PROMPT: &str =
    "Which city would you like to explore? (chicago, new york city, washington)";

pub const MONTH_PROMPT: &str =
    "Which month? (january through june, or 'all')";

pub const DAY_PROMPT: &str =
    "Which day of the week? (monday through sunday, or 'all')";

pub const RAW_DATA_PROMPT: &str =
    "Would you like to see the raw trip data? Enter 'yes' for the first rows.";

pub const MORE_ROWS_PROMPT: &str = "More? Enter 'yes' for the next rows.";

pub const RESTART_PROMPT: &str = "Would you like to restart? Enter 'yes' to go again.";
