//! Bring-up sequence against the mock platform.

use board::pins::{self, LED_STATE_OFF};
use board::{Board, BoardConfig, CoreKind, IdleMode, RetargetConfig, Step};
use drivers::error::{Error, FatalPolicy, Fault, HwStatus};
use drivers::platform::mock::{MockConsole, MockGpio, MockPower, MockSystem, SystemCall};
use drivers::power::IdleAction;

type TestBoard = Board<MockSystem, MockGpio, MockConsole>;

fn kit() -> BoardConfig {
    BoardConfig::new(&pins::LEDS, &pins::BUTTONS).with_retarget(RetargetConfig::KITPROG)
}

fn booted(config: BoardConfig, gpio: MockGpio, console: MockConsole) -> TestBoard {
    let mut board = Board::new(MockSystem::new(), gpio, console, config);
    board.sdk_init();
    board
}

fn led_fault() -> HwStatus {
    HwStatus::new(HwStatus::MODULE_GPIO, 0x10)
}

#[test]
fn full_bring_up_succeeds() {
    let mut board = booted(kit(), MockGpio::new(), MockConsole::new());

    assert_eq!(board.initialize_board(), Ok(()));
    assert_eq!(board.console().inits(), 1);
    for pin in pins::LEDS {
        assert_eq!(board.gpio().state(pin).unwrap().latch, LED_STATE_OFF);
    }

    let steps: Vec<Step> = board.report().steps().map(|o| o.step).collect();
    assert_eq!(
        steps,
        [
            Step::SystemConfig,
            Step::Led(0),
            Step::Led(1),
            Step::Led(2),
            Step::Led(3),
            Step::Led(4),
            Step::Button(0),
            Step::IndicatorCheck,
            Step::Retarget,
        ]
    );
}

#[test]
#[should_panic(expected = "board LED/button")]
fn led_failure_halts() {
    let mut gpio = MockGpio::new();
    gpio.fail_init_on(pins::LED9, led_fault());
    let mut board = booted(kit(), gpio, MockConsole::new());

    let _ = board.initialize_board();
}

#[test]
fn led_failure_reported_skips_retarget() {
    let mut gpio = MockGpio::new();
    gpio.fail_init_on(pins::LED_RGB_BLUE, led_fault());
    let config = kit().with_fatal_policy(FatalPolicy::Report);
    let mut board = booted(config, gpio, MockConsole::new());

    let fatal = Error::Fatal(Fault::Indicators { failed: 1 });
    assert_eq!(board.initialize_board(), Err(fatal));
    assert_eq!(board.console().inits(), 0);

    let report = board.report();
    assert_eq!(
        report.outcome(Step::Led(4)),
        Some(Err(Error::HardwareFailure(led_fault())))
    );
    // Steps after the failing LED still ran
    assert_eq!(report.outcome(Step::Button(0)), Some(Ok(())));
    assert_eq!(report.outcome(Step::Retarget), None);
}

#[test]
fn button_failure_is_fatal_too() {
    let mut gpio = MockGpio::new();
    gpio.fail_init_on(pins::SW2, led_fault());
    let config = kit().with_fatal_policy(FatalPolicy::Report);
    let mut board = booted(config, gpio, MockConsole::new());

    assert!(board.initialize_board().unwrap_err().is_fatal());
}

#[test]
fn retarget_failure_is_the_result() {
    let status = HwStatus::new(HwStatus::MODULE_UART, 0x02);
    let mut board = booted(kit(), MockGpio::new(), MockConsole::failing(status));

    assert_eq!(board.initialize_board(), Err(Error::HardwareFailure(status)));
    assert_eq!(board.report().failures(|_| true), 1);
}

#[test]
fn system_config_failure_skips_retarget() {
    let status = HwStatus::new(HwStatus::MODULE_SYSTEM, 0x01);
    let mut system = MockSystem::new();
    system.fail_system_config(status);
    let mut board = Board::new(system, MockGpio::new(), MockConsole::new(), kit());
    board.sdk_init();

    assert_eq!(board.initialize_board(), Err(Error::HardwareFailure(status)));
    assert_eq!(board.report().outcome(Step::IndicatorCheck), Some(Ok(())));
    assert_eq!(board.console().inits(), 0);
}

#[test]
fn no_retarget_configured() {
    let mut board = booted(
        BoardConfig::new(&pins::LEDS, &pins::BUTTONS),
        MockGpio::new(),
        MockConsole::new(),
    );
    assert_eq!(board.initialize_board(), Ok(()));
    assert_eq!(board.console().inits(), 0);
}

#[test]
fn initialize_board_runs_once() {
    let status = HwStatus::new(HwStatus::MODULE_UART, 0x02);
    let mut board = booted(kit(), MockGpio::new(), MockConsole::failing(status));

    let first = board.initialize_board();
    let init_calls = board.gpio().init_calls();
    assert_eq!(board.initialize_board(), first);
    assert_eq!(board.gpio().init_calls(), init_calls);
    assert_eq!(board.console().inits(), 1);
}

#[test]
fn sdk_init_order_on_application_core() {
    let config = kit().with_secure_mailbox(true);
    let board = booted(config, MockGpio::new(), MockConsole::new());

    let calls: Vec<SystemCall> = board.system().calls().collect();
    assert_eq!(
        calls,
        [
            SystemCall::InitClocks,
            SystemCall::InitSecureMailbox,
            SystemCall::ConfigureDevice,
            SystemCall::EnableInterrupts,
        ]
    );
    assert!(board.hwmgr().is_initialized());
}

#[test]
fn sdk_init_on_lowest_capability_core() {
    let config = kit().with_core(CoreKind::Cm0Plus);
    let board = booted(config, MockGpio::new(), MockConsole::new());

    let calls: Vec<SystemCall> = board.system().calls().collect();
    assert_eq!(calls, [SystemCall::InitClocks]);
    assert!(board.hwmgr().is_initialized());
}

#[test]
fn idle_policy_applied_by_sdk_init() {
    let mut power = MockPower::new();

    let board = booted(kit().with_idle_mode(IdleMode::Sleep), MockGpio::new(), MockConsole::new());
    assert_eq!(board.power().idle(&mut power), IdleAction::Sleep);

    let board = booted(kit().with_idle_mode(IdleMode::Active), MockGpio::new(), MockConsole::new());
    assert_eq!(board.power().idle(&mut power), IdleAction::Hook);

    let board = booted(kit(), MockGpio::new(), MockConsole::new());
    assert_eq!(board.power().idle(&mut power), IdleAction::DeepSleep);

    assert_eq!((power.sleeps(), power.deep_sleeps()), (1, 1));
}
