#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity_name: String,
    pub email: String,
}
