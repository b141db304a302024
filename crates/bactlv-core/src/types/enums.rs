use crate::encoding::enumerated::bacnet_enumeration;

bacnet_enumeration! {
    pub enum EngineeringUnits("BACnetEngineeringUnits") {
        SquareMeters = 0,
        SquareFeet = 1,
        Milliamperes = 2,
        Amperes = 3,
        Ohms = 4,
        Volts = 5,
        Kilovolts = 6,
        Megavolts = 7,
        VoltAmperes = 8,
        KilovoltAmperes = 9,
        MegavoltAmperes = 10,
        VoltAmperesReactive = 11,
        PowerFactor = 15,
        Joules = 16,
        Kilojoules = 17,
        WattHours = 18,
        KilowattHours = 19,
        Hertz = 27,
        PercentRelativeHumidity = 29,
        Millimeters = 30,
        Meters = 31,
        Watts = 47,
        Kilowatts = 48,
        Pascals = 53,
        Kilopascals = 54,
        Bars = 55,
        PoundsForcePerSquareInch = 56,
        DegreesCelsius = 62,
        DegreesKelvin = 63,
        DegreesFahrenheit = 64,
        Days = 70,
        Hours = 71,
        Minutes = 72,
        Seconds = 73,
        MetersPerSecond = 74,
        CubicFeetPerMinute = 84,
        CubicMetersPerSecond = 85,
        LitersPerSecond = 87,
        LitersPerMinute = 88,
        NoUnits = 95,
        PartsPerMillion = 96,
        PartsPerBillion = 97,
        Percent = 98,
    }
    vendor_proprietary VendorProprietary = 0xFFFF;
}

bacnet_enumeration! {
    pub enum EventState("BACnetEventState") {
        Normal = 0,
        Fault = 1,
        Offnormal = 2,
        HighLimit = 3,
        LowLimit = 4,
        LifeSafetyAlarm = 5,
    }
    vendor_proprietary VendorProprietary = 0xFFFF;
}

bacnet_enumeration! {
    pub enum Reliability("BACnetReliability") {
        NoFaultDetected = 0,
        NoSensor = 1,
        OverRange = 2,
        UnderRange = 3,
        OpenLoop = 4,
        ShortedLoop = 5,
        NoOutput = 6,
        UnreliableOther = 7,
        ProcessError = 8,
        MultiStateFault = 9,
        ConfigurationError = 10,
        CommunicationFailure = 12,
        MemberFault = 13,
        MonitoredObjectFault = 14,
        Tripped = 15,
        LampFailure = 16,
        ActivationFailure = 17,
        RenewDhcpFailure = 18,
        RenewFdRegistrationFailure = 19,
        RestartAutoNegotiationFailure = 20,
        RestartFailure = 21,
        ProprietaryCommandFailure = 22,
        FaultsListed = 23,
        ReferencedObjectFault = 24,
    }
    vendor_proprietary VendorProprietary = 0xFFFF;
}

bacnet_enumeration! {
    pub enum DeviceStatus("BACnetDeviceStatus") {
        Operational = 0,
        OperationalReadOnly = 1,
        DownloadRequired = 2,
        DownloadInProgress = 3,
        NonOperational = 4,
        BackupInProgress = 5,
    }
    vendor_proprietary VendorProprietary = 0xFFFF;
}

bacnet_enumeration! {
    pub enum BinaryPV("BACnetBinaryPV") {
        Inactive = 0,
        Active = 1,
    }
}

bacnet_enumeration! {
    pub enum Polarity("BACnetPolarity") {
        Normal = 0,
        Reverse = 1,
    }
}

bacnet_enumeration! {
    /// Segmentation capability advertised during device discovery.
    pub enum Segmentation("BACnetSegmentation") {
        SegmentedBoth = 0,
        SegmentedTransmit = 1,
        SegmentedReceive = 2,
        NoSegmentation = 3,
    }
}

bacnet_enumeration! {
    pub enum NotifyType("BACnetNotifyType") {
        Alarm = 0,
        Event = 1,
        AckNotification = 2,
    }
}

bacnet_enumeration! {
    /// BACnet error class reported in Error PDUs.
    pub enum ErrorClass("ErrorClass") {
        Device = 0,
        Object = 1,
        Property = 2,
        Resources = 3,
        Security = 4,
        Services = 5,
        Vt = 6,
        Communication = 7,
    }
    vendor_proprietary VendorProprietary = 0xFFFF;
}

bacnet_enumeration! {
    /// BACnet error code reported in Error PDUs.
    pub enum ErrorCode("ErrorCode") {
        Other = 0,
        AuthenticationFailed = 1,
        ConfigurationInProgress = 2,
        DeviceBusy = 3,
        DynamicCreationNotSupported = 4,
        FileAccessDenied = 5,
        IncompatibleSecurityLevels = 6,
        InconsistentParameters = 7,
        InconsistentSelectionCriterion = 8,
        InvalidDataType = 9,
        InvalidFileAccessMethod = 10,
        InvalidFileStartPosition = 11,
        InvalidOperatorName = 12,
        InvalidParameterDataType = 13,
        InvalidTimeStamp = 14,
        KeyGenerationError = 15,
        MissingRequiredParameter = 16,
        NoObjectsOfSpecifiedType = 17,
        NoSpaceForObject = 18,
        NoSpaceToAddListElement = 19,
        NoSpaceToWriteProperty = 20,
        NoVtSessionsAvailable = 21,
        PropertyIsNotAList = 22,
        ObjectDeletionNotPermitted = 23,
        ObjectIdentifierAlreadyExists = 24,
        OperationalProblem = 25,
        PasswordFailure = 26,
        ReadAccessDenied = 27,
        SecurityNotSupported = 28,
        ServiceRequestDenied = 29,
        Timeout = 30,
        UnknownObject = 31,
        UnknownProperty = 32,
        UnknownVtClass = 34,
        UnknownVtSession = 35,
        UnsupportedObjectType = 36,
        ValueOutOfRange = 37,
        VtSessionAlreadyClosed = 38,
        VtSessionTerminationFailure = 39,
        WriteAccessDenied = 40,
        CharacterSetNotSupported = 41,
        InvalidArrayIndex = 42,
        CovSubscriptionFailed = 43,
        NotCovProperty = 44,
        OptionalFunctionalityNotSupported = 45,
        InvalidConfigurationData = 46,
        DatatypeNotSupported = 47,
        DuplicateName = 48,
        DuplicateObjectId = 49,
        PropertyIsNotAnArray = 50,
    }
    vendor_proprietary VendorProprietary = 0xFFFF;
}

bacnet_enumeration! {
    pub enum LifeSafetyState("BACnetLifeSafetyState") {
        Quiet = 0,
        PreAlarm = 1,
        Alarm = 2,
        Fault = 3,
        FaultPreAlarm = 4,
        FaultAlarm = 5,
        NotReady = 6,
        Active = 7,
        Tamper = 8,
        TestAlarm = 9,
        TestActive = 10,
        TestFault = 11,
        TestFaultAlarm = 12,
        Holdup = 13,
        Duress = 14,
        TamperAlarm = 15,
        Abnormal = 16,
        EmergencyPower = 17,
        Delayed = 18,
        Blocked = 19,
        LocalAlarm = 20,
        GeneralAlarm = 21,
        Supervisory = 22,
        TestSupervisory = 23,
    }
    vendor_proprietary VendorProprietary = 0xFFFF;
}

bacnet_enumeration! {
    pub enum DoorStatus("BACnetDoorStatus") {
        Closed = 0,
        Opened = 1,
        Unknown = 2,
        DoorFault = 3,
        Unused = 4,
        None = 5,
        Closing = 6,
        Opening = 7,
        SafetyLocked = 8,
        LimitedOpened = 9,
    }
    vendor_proprietary VendorProprietary = 0xFFFF;
}

bacnet_enumeration! {
    pub enum Action("BACnetAction") {
        Direct = 0,
        Reverse = 1,
    }
}
