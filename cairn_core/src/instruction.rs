/// The sign of an instruction, e.g. for a right turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InstructionSign {
    TurnSharpLeft,
    TurnLeft,
    TurnSlightLeft,
    ContinueOnStreet,
    TurnSlightRight,
    TurnRight,
    TurnSharpRight,
    Finish,
    ViaReached,
    UseRoundabout,
}

impl InstructionSign {
    /// Maps a wire code to a sign. Codes outside the known set yield
    /// `None` instead of failing.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -3 => Some(InstructionSign::TurnSharpLeft),
            -2 => Some(InstructionSign::TurnLeft),
            -1 => Some(InstructionSign::TurnSlightLeft),
            0 => Some(InstructionSign::ContinueOnStreet),
            1 => Some(InstructionSign::TurnSlightRight),
            2 => Some(InstructionSign::TurnRight),
            3 => Some(InstructionSign::TurnSharpRight),
            4 => Some(InstructionSign::Finish),
            5 => Some(InstructionSign::ViaReached),
            6 => Some(InstructionSign::UseRoundabout),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            InstructionSign::TurnSharpLeft => -3,
            InstructionSign::TurnLeft => -2,
            InstructionSign::TurnSlightLeft => -1,
            InstructionSign::ContinueOnStreet => 0,
            InstructionSign::TurnSlightRight => 1,
            InstructionSign::TurnRight => 2,
            InstructionSign::TurnSharpRight => 3,
            InstructionSign::Finish => 4,
            InstructionSign::ViaReached => 5,
            InstructionSign::UseRoundabout => 6,
        }
    }
}

/// One turn-by-turn step of a route path.
///
/// The last instruction of a path is always the finish instruction and
/// takes 0 ms and 0 meters.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    /// What the user has to do to follow the route, in the requested locale.
    pub text: String,

    /// Name of the street the instruction takes place on.
    pub street_name: String,

    /// Distance covered by this instruction, in meters.
    pub distance: f64,

    /// Duration of this instruction, in milliseconds.
    pub time: u64,

    /// First and last index into the parent path's point sequence for
    /// which this instruction is valid.
    pub interval: Vec<usize>,

    pub sign: Option<InstructionSign>,

    /// Only present when `sign` is `UseRoundabout`: the exit at which the
    /// route leaves the roundabout.
    pub exit_number: Option<i64>,

    /// Only present when `sign` is `UseRoundabout`: the radian of the
    /// route within the roundabout, clockwise positive.
    pub turn_angle: Option<f64>,
}
